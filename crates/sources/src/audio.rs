//! Audio volume data source (pamixer-compatible mixer CLI)
//!
//! A mixer that is missing, times out or cannot report a volume renders
//! `NO_AUDIO`. Only an unparsable volume falls through to the block failure
//! text.

use crate::command::SharedRunner;
use barline_core::{DataSource, SourceError, SourceMetadata, SourceOutput, SourceResult};
use barline_types::AudioSourceConfig;
use log::debug;
use std::time::Duration;

/// Shown when the mixer cannot report a volume (no device, no daemon)
pub const NO_AUDIO: &str = "Could not find audio";

const ICON_MUTED: &str = "\u{1F507}";
const ICON_LOW: &str = "\u{1F508}";
const ICON_MID: &str = "\u{1F509}";
const ICON_HIGH: &str = "\u{1F50A}";

const LOW_THRESHOLD: f64 = 33.3;
const MID_THRESHOLD: f64 = 66.3;

/// Pick the volume icon and render `<icon><volume>%`.
///
/// `volume` is the mixer's output and is kept verbatim in the text.
pub fn format_volume(volume: &str, muted: bool) -> SourceResult<String> {
    let level: u32 = volume
        .parse()
        .map_err(|_| SourceError::parse("volume", volume))?;

    let icon = if muted {
        ICON_MUTED
    } else if f64::from(level) < LOW_THRESHOLD {
        ICON_LOW
    } else if f64::from(level) < MID_THRESHOLD {
        ICON_MID
    } else {
        ICON_HIGH
    };

    Ok(format!("{}{}%", icon, volume))
}

/// Volume and mute state from `<mixer> --get-volume` / `--get-mute`
pub struct AudioSource {
    metadata: SourceMetadata,
    mixer: String,
    runner: SharedRunner,
}

impl AudioSource {
    pub fn new(config: &AudioSourceConfig, runner: SharedRunner) -> Self {
        let metadata = SourceMetadata {
            id: "audio".to_string(),
            name: "Audio Volume".to_string(),
            description: "Output volume and mute state".to_string(),
            default_interval: Duration::from_millis(1000),
        };

        Self {
            metadata,
            mixer: config.mixer.clone(),
            runner,
        }
    }
}

impl DataSource for AudioSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let volume = match self.runner.run(&self.mixer, &["--get-volume"]) {
            Ok(output) if output.success => output.stdout.trim().to_string(),
            Ok(output) => {
                debug!("{} --get-volume failed with {}", self.mixer, output.status);
                return Ok(SourceOutput::text(NO_AUDIO));
            }
            Err(e) => {
                debug!("{} --get-volume unavailable: {}", self.mixer, e);
                return Ok(SourceOutput::text(NO_AUDIO));
            }
        };

        // pamixer exits non-zero when not muted, so only stdout counts here
        let muted = match self.runner.run(&self.mixer, &["--get-mute"]) {
            Ok(mute) => mute.stdout.trim().eq_ignore_ascii_case("true"),
            Err(e) => {
                debug!("{} --get-mute unavailable: {}", self.mixer, e);
                return Ok(SourceOutput::text(NO_AUDIO));
            }
        };

        format_volume(&volume, muted).map(SourceOutput::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::ScriptedRunner;
    use crate::command::CommandOutput;
    use std::sync::Arc;

    fn scripted(volume: CommandOutput, mute: CommandOutput) -> Arc<ScriptedRunner> {
        Arc::new(
            ScriptedRunner::default()
                .with("pamixer --get-volume", volume)
                .with("pamixer --get-mute", mute),
        )
    }

    fn query(runner: Arc<ScriptedRunner>) -> String {
        let mut source = AudioSource::new(&AudioSourceConfig::default(), runner);
        source.query().unwrap().full_text
    }

    #[test]
    fn test_low_volume() {
        let runner = scripted(CommandOutput::ok("0\n"), CommandOutput::failed(1, "false\n"));
        assert_eq!(query(runner), "\u{1F508}0%");
    }

    #[test]
    fn test_mid_volume() {
        let runner = scripted(CommandOutput::ok("50\n"), CommandOutput::failed(1, "false\n"));
        assert_eq!(query(runner), "\u{1F509}50%");
    }

    #[test]
    fn test_high_volume() {
        let runner = scripted(CommandOutput::ok("80\n"), CommandOutput::failed(1, "false\n"));
        assert_eq!(query(runner), "\u{1F50A}80%");
    }

    #[test]
    fn test_muted_wins_over_level() {
        let runner = scripted(CommandOutput::ok("100\n"), CommandOutput::ok("true\n"));
        assert_eq!(query(runner), "\u{1F507}100%");
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(format_volume("33", false).unwrap(), "\u{1F508}33%");
        assert_eq!(format_volume("34", false).unwrap(), "\u{1F509}34%");
        assert_eq!(format_volume("66", false).unwrap(), "\u{1F509}66%");
        assert_eq!(format_volume("67", false).unwrap(), "\u{1F50A}67%");
    }

    #[test]
    fn test_volume_failure_skips_mute_query() {
        let runner = scripted(
            CommandOutput::failed(1, ""),
            CommandOutput::ok("false\n"),
        );
        assert_eq!(query(runner.clone()), NO_AUDIO);
        assert_eq!(runner.calls(), vec!["pamixer --get-volume".to_string()]);
    }

    #[test]
    fn test_missing_mixer_reports_no_audio() {
        assert_eq!(query(Arc::new(ScriptedRunner::default())), NO_AUDIO);
    }

    #[test]
    fn test_mute_query_unavailable_reports_no_audio() {
        let runner = Arc::new(
            ScriptedRunner::default().with("pamixer --get-volume", CommandOutput::ok("40")),
        );
        assert_eq!(query(runner), NO_AUDIO);
    }

    #[test]
    fn test_unparsable_volume_is_error() {
        assert!(format_volume("loud", false).is_err());
    }

    #[test]
    fn test_custom_mixer() {
        let runner = Arc::new(
            ScriptedRunner::default()
                .with("mixer-cli --get-volume", CommandOutput::ok("20"))
                .with("mixer-cli --get-mute", CommandOutput::ok("false")),
        );
        let config = AudioSourceConfig {
            mixer: "mixer-cli".to_string(),
            ..Default::default()
        };
        let mut source = AudioSource::new(&config, runner);
        assert_eq!(source.query().unwrap().full_text, "\u{1F508}20%");
    }
}
