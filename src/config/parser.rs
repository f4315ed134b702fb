use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use asset_mapper::config::load_config;
///
/// let config = load_config(Path::new("asset-mapper.toml")).unwrap();
/// println!("Max pages: {}", config.crawler.max_pages);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration file if one was given, otherwise returns the defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-pages = 50
request-timeout = 5
connect-timeout = 2
max-redirects = 3

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"

[output]
path = "report.json"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_pages, 50);
        assert_eq!(config.crawler.request_timeout, 5);
        assert_eq!(config.crawler.connect_timeout, 2);
        assert_eq!(config.crawler.max_redirects, 3);
        assert_eq!(config.user_agent.crawler_name, "TestCrawler");
        assert_eq!(config.output.path, "report.json");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[crawler]\nmax-pages = 7\n").unwrap();

        assert_eq!(config.crawler.max_pages, 7);
        assert_eq!(config.crawler.request_timeout, 30);
        assert_eq!(config.user_agent.crawler_name, "asset-mapper");
    }

    #[test]
    fn test_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.crawler.max_pages, 0);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[crawler]\nrequest-timeout = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_config_or_default() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.crawler.max_redirects, 10);

        let file = create_temp_config("[crawler]\nmax-redirects = 2\n");
        let config = load_config_or_default(Some(file.path())).unwrap();
        assert_eq!(config.crawler.max_redirects, 2);
    }
}
