use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Google Generative AI API key. Optional at load time: a missing key
    /// is reported per-request as a generic processing error, never leaked.
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Gemini model identifier
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Generative Language API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Deployment environment ("production" hides upstream error detail)
    #[serde(default = "default_app_env")]
    pub app_env: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// True outside production; controls whether raw upstream error text
    /// is attached to error responses
    pub fn expose_error_detail(&self) -> bool {
        self.app_env != "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_exposure_by_environment() {
        let mut config = Config {
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            gemini_api_url: default_gemini_api_url(),
            app_env: "development".to_string(),
            host: default_host(),
            port: default_port(),
        };
        assert!(config.expose_error_detail());

        config.app_env = "production".to_string();
        assert!(!config.expose_error_detail());
    }
}
