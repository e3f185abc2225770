// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

// Configuration for the password generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub min_length: usize,
    pub max_length: usize,
    pub default_form_length: usize,
    pub default_api_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            min_length: 8,
            max_length: 128,
            default_form_length: 8,
            default_api_length: 16,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables.
    //
    // Returns the config together with warnings for ignored values; the logger
    // is not installed yet, so the caller logs them once it is.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Web Interface
        if let Some(address) = lookup("PASSGEN_ADDRESS") {
            config.web_address = address;
        }

        if let Some(port) = parse_var(&lookup, "PASSGEN_PORT", &mut warnings) {
            config.web_port = port;
        }

        // Password Generation
        if let Some(length) =
            parse_var::<usize, _>(&lookup, "PASSGEN_API_DEFAULT_LENGTH", &mut warnings)
        {
            if (config.min_length..=config.max_length).contains(&length) {
                config.default_api_length = length;
            } else {
                warnings.push(format!(
                    "PASSGEN_API_DEFAULT_LENGTH={} is outside {}..={}, keeping {}",
                    length, config.min_length, config.max_length, config.default_api_length
                ));
            }
        }

        // Logging
        if let Some(level) = parse_var(&lookup, "PASSGEN_LOG_LEVEL", &mut warnings) {
            config.log_level = level;
        }

        if let Some(path) = lookup("PASSGEN_LOG_FILE") {
            if !path.is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }

        (config, warnings)
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring unparseable {}='{}'", key, raw));
            None
        }
    }
}
