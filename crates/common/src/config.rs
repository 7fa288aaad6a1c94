use serde::Deserialize;

/// Default Resend endpoint for transactional email.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Default sender identity stamped on every outbound email.
pub const DEFAULT_EMAIL_FROM: &str = "Toppers Academy <noreply@toppers-academy.com>";

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Resend API key, sent as the bearer credential on every delivery
    pub resend_api_key: Option<String>,

    /// Resend emails endpoint
    pub resend_api_url: String,

    /// Email sender address
    pub email_from: String,

    /// Escape interpolated fields before embedding them in the HTML body
    pub escape_html: bool,

    /// HTTP listen port (default: 3000)
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            email_from: DEFAULT_EMAIL_FROM.to_string(),
            escape_html: true,
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            resend_api_key: std::env::var("RESEND_API_KEY").ok(),
            resend_api_url: std::env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
            escape_html: parse_bool(
                "RELAY_ESCAPE_HTML",
                std::env::var("RELAY_ESCAPE_HTML").ok().as_deref(),
                true,
            )?,
            port: std::env::var("RELAY_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RELAY_PORT must be a valid u16"))?,
        })
    }
}

/// Parse a boolean flag, accepting `true/false`, `1/0`, `yes/no` (case-insensitive).
fn parse_bool(name: &str, raw: Option<&str>, default: bool) -> anyhow::Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(anyhow::anyhow!("{} must be a boolean, got {:?}", name, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_defaults_when_unset() {
        assert!(parse_bool("X", None, true).unwrap());
        assert!(!parse_bool("X", None, false).unwrap());
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", Some("TRUE"), false).unwrap());
        assert!(parse_bool("X", Some(" yes "), false).unwrap());
        assert!(!parse_bool("X", Some("0"), true).unwrap());
        assert!(!parse_bool("X", Some("No"), true).unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("RELAY_ESCAPE_HTML", Some("maybe"), true).unwrap_err();
        assert!(err.to_string().contains("RELAY_ESCAPE_HTML"));
    }

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.resend_api_url, "https://api.resend.com/emails");
        assert_eq!(
            config.email_from,
            "Toppers Academy <noreply@toppers-academy.com>"
        );
        assert!(config.escape_html);
        assert_eq!(config.port, 3000);
        assert!(config.resend_api_key.is_none());
    }
}
