//! CPU frequency data source implementation

use barline_core::{DataSource, SourceError, SourceMetadata, SourceOutput, SourceResult};
use barline_types::CpuSourceConfig;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const MHZ_KEY: &str = "cpu MHz";

/// Mean clock of all logical cores, truncated to whole MHz.
///
/// Every line mentioning `cpu MHz` contributes its last token.
pub fn average_frequency(cpuinfo: &str) -> SourceResult<u64> {
    let mut total = 0.0;
    let mut count = 0u32;

    for line in cpuinfo.lines().filter(|line| line.contains(MHZ_KEY)) {
        let value = line.split_whitespace().last().unwrap_or_default();
        let mhz: f64 = value
            .parse()
            .map_err(|_| SourceError::parse("cpu frequency", value))?;
        total += mhz;
        count += 1;
    }

    if count == 0 {
        return Err(SourceError::NoMatchingLines(MHZ_KEY));
    }

    Ok((total / f64::from(count)) as u64)
}

/// Average CPU frequency read from `/proc/cpuinfo`
pub struct CpuSource {
    metadata: SourceMetadata,
    cpuinfo_path: PathBuf,
}

impl CpuSource {
    pub fn new(config: &CpuSourceConfig) -> Self {
        let metadata = SourceMetadata {
            id: "cpu".to_string(),
            name: "CPU Frequency".to_string(),
            description: "Average frequency across all logical cores".to_string(),
            default_interval: Duration::from_millis(3000),
        };

        Self {
            metadata,
            cpuinfo_path: config.cpuinfo_path.clone(),
        }
    }
}

impl DataSource for CpuSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let cpuinfo = fs::read_to_string(&self.cpuinfo_path).map_err(|source| SourceError::Read {
            path: self.cpuinfo_path.clone(),
            source,
        })?;
        let mhz = average_frequency(&cpuinfo)?;
        Ok(SourceOutput::text(format!("{} MHz", mhz)))
    }
}
