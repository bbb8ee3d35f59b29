//! Clock data sources (time of day and calendar date)

use barline_core::{DataSource, SourceError, SourceMetadata, SourceOutput, SourceResult};
use barline_types::{DateSourceConfig, TimeSourceConfig};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::{Display, Write};
use std::time::Duration;

/// Where "now" is read from
#[derive(Debug, Clone, Copy, PartialEq)]
enum Zone {
    Local,
    Named(Tz),
}

impl Zone {
    fn parse(name: &str) -> SourceResult<Self> {
        if name == "Local" {
            return Ok(Zone::Local);
        }
        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| SourceError::UnknownTimeZone(name.to_string()))
    }
}

/// Formats the current time in a fixed time zone.
///
/// Used for both the time and the date block; only the format string and
/// metadata differ.
pub struct ClockSource {
    metadata: SourceMetadata,
    zone: Zone,
    format: String,
}

impl ClockSource {
    pub fn time(config: &TimeSourceConfig) -> SourceResult<Self> {
        let metadata = SourceMetadata {
            id: "time".to_string(),
            name: "Time".to_string(),
            description: "Current time of day in the configured time zone".to_string(),
            default_interval: Duration::from_millis(1000),
        };
        Self::new(metadata, &config.timezone, &config.format)
    }

    pub fn date(config: &DateSourceConfig) -> SourceResult<Self> {
        let metadata = SourceMetadata {
            id: "date".to_string(),
            name: "Date".to_string(),
            description: "Current date in the configured time zone".to_string(),
            default_interval: Duration::from_millis(100_000),
        };
        Self::new(metadata, &config.timezone, &config.format)
    }

    fn new(metadata: SourceMetadata, timezone: &str, format: &str) -> SourceResult<Self> {
        // Rendering an invalid format item fails at display time, so reject it here
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(SourceError::parse("clock format", format));
        }

        Ok(Self {
            metadata,
            zone: Zone::parse(timezone)?,
            format: format.to_string(),
        })
    }

    /// Render `datetime` with this source's format string
    pub fn format_at<T>(&self, datetime: &DateTime<T>) -> SourceResult<String>
    where
        T: TimeZone,
        T::Offset: Display,
    {
        let mut text = String::new();
        write!(text, "{}", datetime.format(&self.format))
            .map_err(|_| SourceError::parse("clock format", self.format.as_str()))?;
        Ok(text)
    }
}

impl DataSource for ClockSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let text = match self.zone {
            Zone::Local => self.format_at(&Local::now())?,
            Zone::Named(tz) => self.format_at(&Utc::now().with_timezone(&tz))?,
        };
        Ok(SourceOutput::text(text))
    }
}
