use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/app.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub first_superuser: String,
    pub first_superuser_password: String,
    pub db_max_connections: u32,
}

impl Config {
    /// Build the config from environment variables, falling back to defaults.
    /// Call `dotenvy::dotenv()` first if `.env` should be honoured.
    pub fn from_env() -> Self {
        let db_max_connections =
            parse_max_connections(env::var("DB_MAX_CONNECTIONS").ok().as_deref());

        Config {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr: var_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            session_key: env::var("SESSION_KEY").ok(),
            first_superuser: var_or("FIRST_SUPERUSER", "admin@example.com"),
            first_superuser_password: var_or("FIRST_SUPERUSER_PASSWORD", "changethis"),
            db_max_connections,
        }
    }
}

fn parse_max_connections(raw: Option<&str>) -> u32 {
    match raw {
        Some(val) => val.trim().parse().unwrap_or_else(|_| {
            log::warn!("DB_MAX_CONNECTIONS={val:?} is not a number, using {DEFAULT_MAX_CONNECTIONS}");
            DEFAULT_MAX_CONNECTIONS
        }),
        None => DEFAULT_MAX_CONNECTIONS,
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_connections_defaults_when_unset() {
        assert_eq!(parse_max_connections(None), DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn max_connections_falls_back_on_garbage() {
        assert_eq!(parse_max_connections(Some("lots")), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(parse_max_connections(Some("-3")), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(parse_max_connections(Some("")), DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn max_connections_parses_numbers() {
        assert_eq!(parse_max_connections(Some("16")), 16);
        assert_eq!(parse_max_connections(Some(" 4 ")), 4);
    }

    #[test]
    fn var_or_skips_missing_and_blank() {
        assert_eq!(var_or("MEETINGS_CONFIG_TEST_UNSET", "fallback"), "fallback");

        // Keys are unique to this test, so no other test observes them.
        unsafe {
            env::set_var("MEETINGS_CONFIG_TEST_BLANK", "   ");
            env::set_var("MEETINGS_CONFIG_TEST_SET", "0.0.0.0:9000");
        }
        assert_eq!(var_or("MEETINGS_CONFIG_TEST_BLANK", "fallback"), "fallback");
        assert_eq!(var_or("MEETINGS_CONFIG_TEST_SET", "fallback"), "0.0.0.0:9000");
    }
}
