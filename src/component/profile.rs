//! Welcome card component.
//!
//! A profile card has no state of its own: everything it shows is derived
//! from a [`ProfileConfig`] when the card is built.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const ONLINE_LABEL: &str = "🟢 Online";
pub const OFFLINE_LABEL: &str = "⚫ Offline";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default = "default_email")]
    pub email: String,
}

impl ProfileConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: default_role(),
            avatar_url: None,
            is_online: false,
            email: default_email(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// `index` is the card's position, used to name it in the report.
    pub fn validate(&self, index: usize) -> Vec<ConfigError> {
        if self.name.trim().is_empty() {
            vec![ConfigError::EmptyName { index }]
        } else {
            Vec::new()
        }
    }
}

fn default_role() -> String {
    "user".to_string()
}
fn default_email() -> String {
    "aaa@abc.def".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initial(String),
}

/// Uppercased first character of `name`, empty for an empty name.
///
/// Scripts without case (Hangul, Han) come back unchanged.
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Everything a welcome card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub avatar: Avatar,
    pub name: String,
    pub role: String,
    pub email: String,
    pub is_online: bool,
}

impl ProfileCard {
    pub fn new(config: &ProfileConfig) -> Self {
        let avatar = match &config.avatar_url {
            Some(url) => Avatar::Image(url.clone()),
            None => Avatar::Initial(initial_of(&config.name)),
        };
        Self {
            avatar,
            name: config.name.clone(),
            role: config.role.clone(),
            email: config.email.clone(),
            is_online: config.is_online,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_online {
            ONLINE_LABEL
        } else {
            OFFLINE_LABEL
        }
    }

    pub fn greeting(&self) -> String {
        format!("Hello! Welcome, {}.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ProfileConfig::new("alice");
        assert_eq!(cfg.role, "user");
        assert_eq!(cfg.email, "aaa@abc.def");
        assert!(!cfg.is_online);
        assert_eq!(cfg.avatar_url, None);
    }

    #[test]
    fn test_initial_avatar() {
        let card = ProfileCard::new(&ProfileConfig::new("김철수"));
        assert_eq!(card.avatar, Avatar::Initial("김".into()));

        let card = ProfileCard::new(&ProfileConfig::new("bob"));
        assert_eq!(card.avatar, Avatar::Initial("B".into()));

        assert_eq!(initial_of(""), "");
        // ß uppercases to two characters
        assert_eq!(initial_of("ßeta"), "SS");
    }

    #[test]
    fn test_image_avatar_wins_over_initial() {
        let cfg = ProfileConfig::new("carol").avatar_url("https://example.com/c.png");
        let card = ProfileCard::new(&cfg);
        assert_eq!(card.avatar, Avatar::Image("https://example.com/c.png".into()));
    }

    #[test]
    fn test_status_label() {
        let offline = ProfileCard::new(&ProfileConfig::new("dave"));
        assert_eq!(offline.status_label(), OFFLINE_LABEL);
        let online = ProfileCard::new(&ProfileConfig::new("dave").online(true));
        assert_eq!(online.status_label(), ONLINE_LABEL);
    }

    #[test]
    fn test_greeting_and_fields() {
        let card = ProfileCard::new(
            &ProfileConfig::new("Erin")
                .role("admin")
                .email("erin@example.com"),
        );
        assert_eq!(card.greeting(), "Hello! Welcome, Erin.");
        assert_eq!(card.role, "admin");
        assert_eq!(card.email, "erin@example.com");
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(ProfileConfig::new("x").validate(0).is_empty());
        assert_eq!(
            ProfileConfig::new("  ").validate(3),
            vec![ConfigError::EmptyName { index: 3 }]
        );
    }
}
