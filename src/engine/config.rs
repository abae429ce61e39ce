// Configuration for the textscan analysis engine and terminal UI
// Defaults: every token looked up, failures isolated, sample dictionary

use std::path::PathBuf;
use thiserror::Error;

/// What a failed dictionary lookup does to the rest of the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the token as unknown and continue with the next one.
    #[default]
    Isolate,
    /// Stop resolving; the tokens resolved so far stay visible.
    Abort,
}

/// Morphology resolution settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolverConfig {
    pub failure_policy: FailurePolicy,

    /// Reuse the first lookup of a repeated token (default off: every
    /// occurrence is looked up)
    pub memoize_duplicates: bool,
}

/// Dictionary source
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictionaryConfig {
    /// JSON dictionary file; the built-in sample is used when unset
    pub path: Option<PathBuf>,
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `TEXTSCAN_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("textscan.log"),
            filter: "info".to_string(),
        }
    }
}

/// Terminal colors as hex strings
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
    /// Color of clickable tag names
    pub link_color: String,
    pub dimmed_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            link_color: "#7AA2F7".to_string(),
            dimmed_color: "#646E96".to_string(),
        }
    }
}

/// Master configuration combining all textscan settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub resolver: ResolverConfig,
    pub log: LogConfig,
    pub theme: ThemeConfig,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    #[error("Invalid color for {flag}: {value} (expected #RRGGBB)")]
    InvalidColor { flag: String, value: String },
}

impl Config {
    /// Applies command-line flags on top of the defaults.
    ///
    /// Supports:
    /// - `--dictionary <path>` → JSON dictionary file
    /// - `--abort-on-error` → `FailurePolicy::Abort`
    /// - `--memoize` → reuse lookups of repeated tokens
    /// - `--log <path>` → log file
    /// - `--link-color <#RRGGBB>` → color of tag names
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dictionary" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.dictionary.path = Some(PathBuf::from(path));
                }
                "--log" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.log.file = PathBuf::from(path);
                }
                "--link-color" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    if !is_hex_color(&value) {
                        return Err(ConfigError::InvalidColor { flag: arg, value });
                    }
                    config.theme.link_color = value;
                }
                "--abort-on-error" => config.resolver.failure_policy = FailurePolicy::Abort,
                "--memoize" => config.resolver.memoize_duplicates = true,
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(config)
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .map_or(false, |digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.resolver.failure_policy, FailurePolicy::Isolate);
        assert!(!config.resolver.memoize_duplicates);
        assert_eq!(config.dictionary.path, None);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_from_args_empty() {
        assert_eq!(Config::from_args(args(&[])), Ok(Config::default()));
    }

    #[test]
    fn test_from_args_all_flags() {
        let config = Config::from_args(args(&[
            "--dictionary",
            "dict.json",
            "--abort-on-error",
            "--memoize",
            "--log",
            "/tmp/t.log",
        ]))
        .unwrap();
        assert_eq!(config.dictionary.path, Some(PathBuf::from("dict.json")));
        assert_eq!(config.resolver.failure_policy, FailurePolicy::Abort);
        assert!(config.resolver.memoize_duplicates);
        assert_eq!(config.log.file, PathBuf::from("/tmp/t.log"));
    }

    #[test]
    fn test_from_args_link_color() {
        let config = Config::from_args(args(&["--link-color", "#0000FF"])).unwrap();
        assert_eq!(config.theme.link_color, "#0000FF");
    }

    #[test]
    fn test_from_args_invalid_link_color() {
        assert_eq!(
            Config::from_args(args(&["--link-color", "blue"])),
            Err(ConfigError::InvalidColor {
                flag: "--link-color".to_string(),
                value: "blue".to_string(),
            })
        );
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::MissingValue("--log".to_string()).to_string(),
            "Missing value for --log"
        );
        assert_eq!(
            ConfigError::UnknownFlag("--fast".to_string()).to_string(),
            "Unknown flag: --fast"
        );
    }

    #[test]
    fn test_from_args_missing_value() {
        assert_eq!(
            Config::from_args(args(&["--dictionary"])),
            Err(ConfigError::MissingValue("--dictionary".to_string()))
        );
    }

    #[test]
    fn test_from_args_unknown_flag() {
        assert!(matches!(
            Config::from_args(args(&["--fast"])),
            Err(ConfigError::UnknownFlag(_))
        ));
    }
}
