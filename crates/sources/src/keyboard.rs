//! Keyboard layout data source

use crate::command::SharedRunner;
use barline_core::{DataSource, SourceError, SourceMetadata, SourceOutput, SourceResult};
use barline_types::KeyboardSourceConfig;
use std::time::Duration;

/// Current layout name as printed by an external query command
pub struct KeyboardSource {
    metadata: SourceMetadata,
    program: String,
    args: Vec<String>,
    runner: SharedRunner,
}

impl KeyboardSource {
    /// Fails if the configured command is empty
    pub fn new(config: &KeyboardSourceConfig, runner: SharedRunner) -> SourceResult<Self> {
        let (program, args) = config
            .command
            .split_first()
            .ok_or_else(|| SourceError::parse("keyboard command", ""))?;

        let metadata = SourceMetadata {
            id: "keyboard".to_string(),
            name: "Keyboard Layout".to_string(),
            description: "Active keyboard layout".to_string(),
            default_interval: Duration::from_millis(1000),
        };

        Ok(Self {
            metadata,
            program: program.clone(),
            args: args.to_vec(),
            runner,
        })
    }
}

impl DataSource for KeyboardSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn query(&mut self) -> SourceResult<SourceOutput> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        let output = self.runner.run(&self.program, &args)?;
        if !output.success {
            return Err(SourceError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
            });
        }
        Ok(SourceOutput::text(output.stdout.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::ScriptedRunner;
    use crate::command::CommandOutput;
    use std::sync::Arc;

    #[test]
    fn test_layout_is_trimmed() {
        let runner = ScriptedRunner::default().with("xkb-switch -p", CommandOutput::ok("  de\n"));
        let mut source =
            KeyboardSource::new(&KeyboardSourceConfig::default(), Arc::new(runner)).unwrap();
        assert_eq!(source.query().unwrap().full_text, "de");
    }

    #[test]
    fn test_custom_command() {
        let runner = ScriptedRunner::default().with(
            "xkblayout-state print %s",
            CommandOutput::ok("us"),
        );
        let config = KeyboardSourceConfig {
            command: vec![
                "xkblayout-state".to_string(),
                "print".to_string(),
                "%s".to_string(),
            ],
            ..Default::default()
        };
        let mut source = KeyboardSource::new(&config, Arc::new(runner)).unwrap();
        assert_eq!(source.query().unwrap().full_text, "us");
    }

    #[test]
    fn test_failed_command_is_error() {
        let runner = ScriptedRunner::default().with("xkb-switch -p", CommandOutput::failed(2, ""));
        let mut source =
            KeyboardSource::new(&KeyboardSourceConfig::default(), Arc::new(runner)).unwrap();
        assert!(matches!(
            source.query().unwrap_err(),
            SourceError::CommandFailed { .. }
        ));
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let config = KeyboardSourceConfig {
            command: Vec::new(),
            ..Default::default()
        };
        assert!(KeyboardSource::new(&config, Arc::new(ScriptedRunner::default())).is_err());
    }
}
