use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// Parse server configuration from environment variables
pub fn parse_server_address() -> Result<SocketAddr, String> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());

    format!("{ip}:{port}")
        .parse()
        .map_err(|e| format!("Invalid IP or PORT environment variables: {e}"))
}

/// Settings for the completion API, read once at startup.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_output_tokens: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl AssistantConfig {
    /// Read `GOOGLE_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`,
    /// `ASSISTANT_TIMEOUT_SECS` and `ASSISTANT_MAX_OUTPUT_TOKENS`.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("ASSISTANT_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let max_output_tokens = std::env::var("ASSISTANT_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);

        Self {
            api_key: std::env::var("GOOGLE_API_KEY").ok(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Use a mutex to ensure tests don't interfere with each other
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ASSISTANT_VARS: [&str; 5] = [
        "GOOGLE_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
        "ASSISTANT_TIMEOUT_SECS",
        "ASSISTANT_MAX_OUTPUT_TOKENS",
    ];

    fn clear_assistant_vars() {
        for var in ASSISTANT_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_address() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("IP");
        env::remove_var("PORT");

        let addr = parse_server_address().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_custom_ip_and_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IP", "127.0.0.1");
        env::set_var("PORT", "8000");

        let addr = parse_server_address().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8000");

        env::remove_var("IP");
        env::remove_var("PORT");
    }

    #[test]
    fn test_invalid_ip() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("IP", "invalid.ip.address");
        env::remove_var("PORT");

        let result = parse_server_address();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid IP or PORT"));

        env::remove_var("IP");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("IP");
        env::set_var("PORT", "not_a_number");

        let addr = parse_server_address().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:8080");

        env::remove_var("PORT");
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("IP");
        env::set_var("PORT", "70000"); // > 65535

        let result = parse_server_address();
        assert!(result.is_err());

        env::remove_var("PORT");
    }

    #[test]
    fn test_assistant_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_assistant_vars();

        let config = AssistantConfig::from_env();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_output_tokens, 200);
    }

    #[test]
    fn test_assistant_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_assistant_vars();
        env::set_var("GOOGLE_API_KEY", "AIzaTest");
        env::set_var("GEMINI_MODEL", "gemini-1.5-flash");
        env::set_var("ASSISTANT_TIMEOUT_SECS", "5");
        env::set_var("ASSISTANT_MAX_OUTPUT_TOKENS", "64");

        let config = AssistantConfig::from_env();
        assert_eq!(config.api_key.as_deref(), Some("AIzaTest"));
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_output_tokens, 64);

        clear_assistant_vars();
    }

    #[test]
    fn test_assistant_bad_numbers_fall_back() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_assistant_vars();
        env::set_var("ASSISTANT_TIMEOUT_SECS", "0");
        env::set_var("ASSISTANT_MAX_OUTPUT_TOKENS", "lots");

        let config = AssistantConfig::from_env();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_output_tokens, 200);

        clear_assistant_vars();
    }
}
