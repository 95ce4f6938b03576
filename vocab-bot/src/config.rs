use std::env;

/// Default score at which a word counts as memorized
pub const DEFAULT_MEMORIZATION_THRESHOLD: u32 = 5;

/// Default idle time before a conversation's word list is dropped (24h)
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 86_400;

#[derive(Clone)]
pub struct Config {
    pub telegram_api_token: String,
    /// Only this Telegram user may talk to the bot; `None` leaves it open
    pub telegram_access_id: Option<u64>,
    pub memorization_threshold: u32,
    pub database_url: String,
    pub database_name: String,
    pub session_idle_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let memorization_threshold: u32 = var("MEMORIZATION_THRESHOLD")
            .unwrap_or_else(|| DEFAULT_MEMORIZATION_THRESHOLD.to_string())
            .parse()
            .expect("MEMORIZATION_THRESHOLD must be a valid number");
        assert!(
            memorization_threshold > 0,
            "MEMORIZATION_THRESHOLD must be greater than zero"
        );

        Self {
            telegram_api_token: var("TELEGRAM_API_TOKEN")
                .expect("TELEGRAM_API_TOKEN must be set"),
            telegram_access_id: var("TELEGRAM_ACCESS_ID")
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.trim()
                        .parse()
                        .expect("TELEGRAM_ACCESS_ID must be a numeric Telegram user id")
                }),
            memorization_threshold,
            database_url: var("DB_CONNECTION_STRING").unwrap_or_else(|| "./.db".to_string()),
            database_name: var("DB_NAME").unwrap_or_else(|| "vocabulary".to_string()),
            session_idle_secs: var("SESSION_IDLE_SECS")
                .unwrap_or_else(|| DEFAULT_SESSION_IDLE_SECS.to_string())
                .parse()
                .expect("SESSION_IDLE_SECS must be a valid number"),
        }
    }

    /// SQLite path: `{DB_CONNECTION_STRING}/{DB_NAME}.db`, or `:memory:`
    pub fn database_path(&self) -> String {
        if self.database_url == ":memory:" {
            return self.database_url.clone();
        }
        format!(
            "{}/{}.db",
            self.database_url.trim_end_matches('/'),
            self.database_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("TELEGRAM_API_TOKEN", "123:abc")]);
        assert_eq!(config.telegram_api_token, "123:abc");
        assert_eq!(config.telegram_access_id, None);
        assert_eq!(config.memorization_threshold, DEFAULT_MEMORIZATION_THRESHOLD);
        assert_eq!(config.session_idle_secs, DEFAULT_SESSION_IDLE_SECS);
        assert_eq!(config.database_path(), "./.db/vocabulary.db");
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("TELEGRAM_API_TOKEN", "t"),
            ("TELEGRAM_ACCESS_ID", "42"),
            ("MEMORIZATION_THRESHOLD", "3"),
            ("DB_CONNECTION_STRING", "/var/lib/vocab/"),
            ("DB_NAME", "words"),
            ("SESSION_IDLE_SECS", "60"),
        ]);
        assert_eq!(config.telegram_access_id, Some(42));
        assert_eq!(config.memorization_threshold, 3);
        assert_eq!(config.session_idle_secs, 60);
        assert_eq!(config.database_path(), "/var/lib/vocab/words.db");
    }

    #[test]
    fn test_memory_database() {
        let config = config_from(&[
            ("TELEGRAM_API_TOKEN", "t"),
            ("DB_CONNECTION_STRING", ":memory:"),
        ]);
        assert_eq!(config.database_path(), ":memory:");
    }

    #[test]
    fn test_blank_access_id_is_open() {
        let config = config_from(&[("TELEGRAM_API_TOKEN", "t"), ("TELEGRAM_ACCESS_ID", " ")]);
        assert_eq!(config.telegram_access_id, None);
    }

    #[test]
    #[should_panic(expected = "TELEGRAM_API_TOKEN must be set")]
    fn test_missing_token_panics() {
        config_from(&[]);
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn test_zero_threshold_panics() {
        config_from(&[("TELEGRAM_API_TOKEN", "t"), ("MEMORIZATION_THRESHOLD", "0")]);
    }
}
