use crate::error::ConfigError;
use crate::theme::THEME_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Person shown in the top bar and greeted on the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub display_name: String,
    pub initials: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: "John Doe".into(),
            initials: "JD".into(),
        }
    }
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }

    /// Configured initials, or the first letter of each name part.
    pub fn avatar_text(&self) -> String {
        let initials = self.initials.trim();
        if !initials.is_empty() {
            return initials.to_string();
        }
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub user: UserProfile,
    pub theme_storage_key: String,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Dashboard".into(),
            user: UserProfile::default(),
            theme_storage_key: THEME_STORAGE_KEY.into(),
            log_level: "info".into(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.log_level
            .parse::<tracing::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn greeting(&self) -> String {
        match self.user.first_name() {
            "" => "Welcome back!".to_string(),
            name => format!("Welcome back, {name}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_mock_user() {
        let config = DashboardConfig::default();
        assert_eq!(config.greeting(), "Welcome back, John!");
        assert_eq!(config.user.avatar_text(), "JD");
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{ "user": { "display_name": "Ada Lovelace" } }"#)
                .unwrap();
        assert_eq!(config.title, "Dashboard");
        assert_eq!(config.greeting(), "Welcome back, Ada!");
        assert_eq!(config.user.initials, "JD");
    }

    #[test]
    fn blank_initials_are_derived() {
        let user = UserProfile {
            display_name: "grace brewster hopper".into(),
            initials: " ".into(),
        };
        assert_eq!(user.avatar_text(), "GBH");
    }

    #[test]
    fn rejects_empty_storage_key() {
        let err = DashboardConfig::from_json(r#"{ "theme_storage_key": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStorageKey));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = DashboardConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "chatty"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = DashboardConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn empty_name_gets_plain_greeting() {
        let mut config = DashboardConfig::default();
        config.user.display_name.clear();
        assert_eq!(config.greeting(), "Welcome back!");
    }
}
