use std::{
    env::{self, VarError},
    path::PathBuf,
};

use anyhow::{Context, Result};

/// Environment variable with the path to a dialog document to use instead of the built-in one.
const DIALOG_VAR: &str = "BATTLESHIPS_DIALOG";
/// Environment variable with a seed for the computer opponent's random choices.
const SEED_VAR: &str = "BATTLESHIPS_SEED";

/// Settings for a game session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// The dialog document to load, if not the built-in one.
    pub dialog_path: Option<PathBuf>,
    /// The seed for the computer opponent, if its games should be reproducible.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads the config from environment variables.
    pub fn from_env() -> Result<Config> {
        Config::from_vars(|name| var_value(name, env::var(name)))
    }

    fn from_vars(get_var: impl Fn(&str) -> Result<Option<String>>) -> Result<Config> {
        let dialog_path = get_var(DIALOG_VAR)?
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        let seed = get_var(SEED_VAR)?
            .map(|seed| {
                seed.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{SEED_VAR} should be a number, got {seed:?}"))
            })
            .transpose()?;

        Ok(Config { dialog_path, seed })
    }
}

/// Interprets the result of reading an environment variable, treating only an unset variable as absent.
fn var_value(name: &str, value: Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{name} couldn't be read")),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, ffi::OsString};

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<String, String>>();
        Config::from_vars(|name| Ok(vars.get(name).cloned()))
    }

    #[test]
    fn nothing_set() {
        assert_eq!(Config::default(), config_from(&[]).unwrap());
    }

    #[test]
    fn everything_set() {
        let expected = Config {
            dialog_path: Some(PathBuf::from("/tmp/dialog.xml")),
            seed: Some(1234),
        };

        let config = config_from(&[(DIALOG_VAR, "/tmp/dialog.xml"), (SEED_VAR, " 1234 ")]).unwrap();

        assert_eq!(expected, config);
    }

    #[test]
    fn empty_dialog_path_is_ignored() {
        assert_eq!(None, config_from(&[(DIALOG_VAR, "")]).unwrap().dialog_path);
    }

    #[test]
    fn unset_var_is_absent() {
        assert_eq!(None, var_value(SEED_VAR, Err(VarError::NotPresent)).unwrap());
        assert_eq!(
            Some("5".to_string()),
            var_value(SEED_VAR, Ok("5".to_string())).unwrap()
        );
    }

    #[test]
    fn non_unicode_var_is_an_error() {
        let result = var_value(DIALOG_VAR, Err(VarError::NotUnicode(OsString::from("x"))));

        let error = result.unwrap_err();
        assert!(error.to_string().contains(DIALOG_VAR));
    }

    #[test]
    fn unreadable_var_fails_config() {
        let result = Config::from_vars(|name| {
            if name == SEED_VAR {
                var_value(name, Err(VarError::NotUnicode(OsString::from("1"))))
            } else {
                Ok(None)
            }
        });

        assert!(result.is_err());
    }

    #[test]
    fn invalid_seed() {
        assert!(config_from(&[(SEED_VAR, "lots")]).is_err());
    }
}
