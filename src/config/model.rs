//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::component::{ConfigError, CounterConfig, ProfileConfig};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_counters")]
    pub counters: Vec<CounterConfig>,
    #[serde(default = "default_profiles")]
    pub profiles: Vec<ProfileConfig>,
    #[serde(default = "default_notes")]
    pub notes: Vec<NoteSection>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            counters: default_counters(),
            profiles: default_profiles(),
            notes: default_notes(),
            ui: UiConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Collect advisory problems from every component record.
    pub fn validate(&self) -> Vec<ConfigError> {
        let counters = self.counters.iter().flat_map(CounterConfig::validate);
        let profiles = self
            .profiles
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.validate(i));
        counters.chain(profiles).collect()
    }
}

fn default_counters() -> Vec<CounterConfig> {
    vec![
        CounterConfig::new("Basic Counter"),
        CounterConfig::new("Jump Counter").initial_value(10).step(5),
        CounterConfig::new("Percent Counter")
            .initial_value(50)
            .min(0)
            .max(100)
            .step(10),
        CounterConfig::new("Thermometer")
            .initial_value(20)
            .min(-10)
            .max(40)
            .step(2),
        CounterConfig::new("Score Counter")
            .initial_value(1000)
            .step(100),
        CounterConfig::new("Fine Tuning").min(-20).max(20),
    ]
}

fn default_profiles() -> Vec<ProfileConfig> {
    vec![
        ProfileConfig::new("김철수")
            .role("developer")
            .online(true)
            .email("chulsoo@example.com"),
        ProfileConfig::new("alice").email("alice@example.com"),
        ProfileConfig::new("Bob")
            .role("designer")
            .avatar_url("https://example.com/avatars/bob.png"),
    ]
}

/// One block of the notes view: a heading and its bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSection {
    pub heading: String,
    #[serde(default)]
    pub items: Vec<String>,
}

fn note(heading: &str, items: &[&str]) -> NoteSection {
    NoteSection {
        heading: heading.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn default_notes() -> Vec<NoteSection> {
    vec![
        note(
            "🎣 Owned state",
            &[
                "A component owns the value it remembers",
                "Only its own operations may change it",
                "State is dropped together with the component",
            ],
        ),
        note(
            "📦 Updating state",
            &[
                "Each update reads the previous value",
                "A change marks the screen dirty and triggers a redraw",
                "Clamping keeps every update inside the bounds",
            ],
        ),
        note(
            "🎯 Configuration records",
            &[
                "A struct spells out what a component accepts",
                "Option marks a field the caller may leave out",
                "Defaults give safe behavior without extra setup",
            ],
        ),
        note(
            "🔄 Handling input",
            &[
                "A key press maps to exactly one operation",
                "Disabled controls ignore the key",
                "Styling follows the current state",
            ],
        ),
    ]
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            columns: default_columns(),
            clock_format: default_clock_format(),
            status_timeout_secs: default_status_timeout(),
        }
    }
}

/// Input feedback settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub bell_on_limit: bool,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
    /// Dated log files to keep; 0 keeps all of them.
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
            max_files: default_max_files(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_title() -> String {
    "🎯 Mastering component state".to_string()
}
fn default_subtitle() -> String {
    "Props and state management, one counter at a time".to_string()
}
fn default_columns() -> u16 {
    3
}
fn default_clock_format() -> String {
    "%H:%M".to_string()
}
fn default_status_timeout() -> u64 {
    4
}
fn default_log_dir() -> String {
    "~/.local/share/tallycard/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
fn default_max_files() -> usize {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.counters.len(), 6);
        assert_eq!(cfg.profiles.len(), 3);
        assert_eq!(cfg.notes.len(), 4);
        assert_eq!(cfg.ui.columns, 3);
        assert!(cfg.logging.enabled);
        assert!(!cfg.behavior.bell_on_limit);
    }

    #[test]
    fn test_partial_records_fill_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[counters]]
            title = "Percent"
            initial_value = 50
            min = 0
            max = 100
            step = 10

            [[counters]]

            [[profiles]]
            name = "김철수"

            [ui]
            columns = 2
            "#,
        )
        .unwrap();

        assert_eq!(cfg.counters.len(), 2);
        assert_eq!(cfg.counters[0].max, Some(100));
        assert_eq!(cfg.counters[1], CounterConfig::default());
        assert_eq!(cfg.profiles[0], ProfileConfig::new("김철수"));
        assert_eq!(cfg.ui.columns, 2);
        assert_eq!(cfg.ui.clock_format, "%H:%M");
        assert_eq!(cfg.notes.len(), 4);
    }

    #[test]
    fn test_profile_requires_name() {
        let err = toml::from_str::<AppConfig>("[[profiles]]\nrole = \"admin\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_fractional_step_is_rejected() {
        let err = toml::from_str::<AppConfig>("[[counters]]\nstep = 0.5\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_round_trip_keeps_components() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.counters, cfg.counters);
        assert_eq!(back.profiles, cfg.profiles);
        assert_eq!(back.notes, cfg.notes);
    }

    #[test]
    fn test_defaults_validate_cleanly() {
        assert!(AppConfig::default().validate().is_empty());
    }
}
