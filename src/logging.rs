//! log4rs setup.
//!
//! Diagnostics go to stderr so stdout carries only the networks.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Build the default stderr-only logging configuration.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}

/// Whether diagnostics may carry ANSI colours.
///
/// Diagnostics are written through log4rs, to stderr or to whatever a YAML
/// config names, so colour is only used for the built-in config on a terminal.
pub fn color_enabled(no_color: bool, config_file: Option<&Path>, stderr_is_terminal: bool) -> bool {
    !no_color && config_file.is_none() && stderr_is_terminal
}

/// Initialize logging from a log4rs YAML file, or the built-in stderr config.
pub fn init_logging(config_file: Option<&Path>, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    match config_file {
        Some(file) => {
            log4rs::init_file(file, Default::default())
                .map_err(|e| format!("Error initializing log4rs from {}: {e}", file.display()))?;
            log::debug!("Logging configured from {}", file.display());
        }
        None => {
            log4rs::init_config(stderr_config(level)?)
                .map_err(|e| format!("Error initializing log4rs: {e}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Info).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stderr");
    }

    #[test]
    fn test_color_enabled() {
        assert!(color_enabled(false, None, true));
        // redirected stderr
        assert!(!color_enabled(false, None, false));
        assert!(!color_enabled(true, None, true));
        // YAML config may route to a file appender
        assert!(!color_enabled(false, Some(Path::new("log4rs.yml")), true));
    }
}
