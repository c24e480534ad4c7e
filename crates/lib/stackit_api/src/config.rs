//! API server configuration.

/// Origins allowed to call `/api/*` from a browser when none are configured.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "https://your-vercel-app.vercel.app",
];

/// Address the server binds when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// Exact origin strings accepted by the CORS layer on `/api/*`.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_local_frontends() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert!(config.allowed_origins.iter().any(|o| o == "http://localhost:3000"));
        assert_eq!(config.allowed_origins.len(), 3);
    }
}
