use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use crate::core::keywords::{Vocabulary, VocabularyError};
use crate::models::{ExtractionOptions, ScoringWeights};

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub vocabulary: VocabularySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
    pub min_score: Option<f64>,
}

impl MatchingSettings {
    pub fn default_limit(&self) -> u16 {
        self.default_limit.unwrap_or(20)
    }

    pub fn max_limit(&self) -> u16 {
        self.max_limit.unwrap_or(100)
    }

    pub fn min_score(&self) -> f64 {
        self.min_score.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            interests: default_interests_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.6 }
fn default_interests_weight() -> f64 { 0.4 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            interests: config.interests,
        }
    }
}

/// Toggles for the optional parts of an extracted fragment
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    #[serde(default = "default_true")]
    pub projects: bool,
    #[serde(default = "default_true")]
    pub team_preferences: bool,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            projects: true,
            team_preferences: true,
        }
    }
}

fn default_true() -> bool { true }

impl From<&ExtractionSettings> for ExtractionOptions {
    fn from(settings: &ExtractionSettings) -> Self {
        Self {
            projects: settings.projects,
            team_preferences: settings.team_preferences,
        }
    }
}

/// Keyword list overrides; a missing list keeps the built-in one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularySettings {
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

impl VocabularySettings {
    pub fn build(&self) -> Result<Vocabulary, VocabularyError> {
        Vocabulary::from_overrides(self.skills.as_deref(), self.interests.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` values on top of the configured ones
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = format;
        }
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HACKBUDDY_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HACKBUDDY__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build the vocabulary once so a bad override fails at start-up
    pub fn vocabulary(&self) -> Result<Vocabulary, SettingsError> {
        Ok(self.vocabulary.build()?)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HACKBUDDY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 0.6);
        assert_eq!(weights.interests, 0.4);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_logging_section_is_read() {
        let settings = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "pretty"
            "#,
        );

        let logging = settings.logging.with_overrides(None, None);
        assert_eq!(logging.level, "debug");
        assert!(logging.is_pretty());
    }

    #[test]
    fn test_logging_env_values_win() {
        let settings = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "pretty"
            "#,
        );

        let logging = settings
            .logging
            .with_overrides(Some("warn".to_string()), Some("json".to_string()));
        assert_eq!(logging.level, "warn");
        assert!(!logging.is_pretty());

        // Blank values keep the configured ones
        let logging = LoggingSettings::default().with_overrides(Some(" ".to_string()), None);
        assert_eq!(logging.level, "info");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = from_toml("");

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.matching.default_limit(), 20);
        assert_eq!(settings.matching.max_limit(), 100);
        assert!(settings.extraction.projects);
        assert!(settings.vocabulary.skills.is_none());
    }

    #[test]
    fn test_overrides_from_file() {
        let settings = from_toml(
            r#"
            [server]
            port = 9000

            [scoring.weights]
            skills = 0.7

            [extraction]
            projects = false

            [vocabulary]
            skills = ["rust", "go"]
            "#,
        );

        assert_eq!(settings.server.port, 9000);
        assert_eq!(ScoringWeights::from(&settings.scoring.weights).skills, 0.7);
        assert_eq!(settings.scoring.weights.interests, 0.4);
        assert!(!ExtractionOptions::from(&settings.extraction).projects);

        let vocabulary = settings.vocabulary().unwrap();
        assert_eq!(vocabulary.skills.len(), 2);
    }

    #[test]
    fn test_blank_vocabulary_phrase_is_rejected() {
        let settings = from_toml(
            r#"
            [vocabulary]
            interests = ["robotics", ""]
            "#,
        );

        assert!(matches!(settings.vocabulary(), Err(SettingsError::Vocabulary(_))));
    }
}
