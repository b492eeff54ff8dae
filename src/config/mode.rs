//! Build mode (development vs. production)

use std::fmt;

/// Environment variable the build mode is read from
pub const MODE_ENV_VAR: &str = "BLOGDATA_ENV";

/// Whether the site is built for local drafting or for publishing.
///
/// Resolved once at startup and then passed explicitly to everything that
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Read the mode from `BLOGDATA_ENV`
    pub fn from_env() -> Self {
        let value = std::env::var(MODE_ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }

    /// Only the exact value `production` selects production; anything else,
    /// including an unset variable, is development.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => BuildMode::Production,
            _ => BuildMode::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Development => f.write_str("development"),
            BuildMode::Production => f.write_str("production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_value() {
        assert_eq!(
            BuildMode::from_env_value(Some("production")),
            BuildMode::Production
        );
    }

    #[test]
    fn test_everything_else_is_development() {
        assert_eq!(BuildMode::from_env_value(None), BuildMode::Development);
        assert_eq!(
            BuildMode::from_env_value(Some("development")),
            BuildMode::Development
        );
        assert_eq!(
            BuildMode::from_env_value(Some("Production")),
            BuildMode::Development
        );
        assert_eq!(BuildMode::from_env_value(Some("")), BuildMode::Development);
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildMode::Production.to_string(), "production");
        assert!(BuildMode::Development.is_development());
        assert!(!BuildMode::Production.is_development());
    }
}
