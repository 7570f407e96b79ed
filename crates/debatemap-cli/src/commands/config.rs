//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command against the file at `path`.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<String> {
    match args.action {
        ConfigAction::Show => config.to_toml(),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::AlreadyExists(path.display().to_string()));
            }
            config.save_to(path)?;
            Ok(formatter.outcome(
                &path.display().to_string(),
                &format!("Wrote {}", path.display()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_refuse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let init = || ConfigArgs {
            action: ConfigAction::Init { force: false },
        };

        execute_config(init(), &Config::default(), &path, &testing::plain()).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let err = execute_config(init(), &Config::default(), &path, &testing::plain()).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
    }

    #[test]
    fn test_show_lists_tables() {
        let args = ConfigArgs {
            action: ConfigAction::Show,
        };
        let output = execute_config(args, &Config::default(), Path::new("unused"), &testing::plain()).unwrap();
        assert!(output.contains("[store]"));
        assert!(output.contains("[layout]"));
        assert!(output.contains("[output]"));
    }
}
