/// Runtime configuration for warranty lookups and the optional inventory
/// integration.
///
/// Loaded from environment variables by [`crate::config::load_app_config`].
/// The inventory fields are only required when a run resolves serials from
/// Device42 instead of taking them on the command line.
#[derive(Clone)]
pub struct AppConfig {
    /// Base URL for the vendor warranty endpoint; serials are appended
    /// directly to this value.
    pub warranty_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// When `true` the warranty client skips TLS certificate verification.
    /// Matches the vendor endpoint's historical behavior; kept as explicit
    /// configuration so deployments can turn verification back on.
    pub accept_invalid_certs: bool,
    /// Ceiling on simultaneously outstanding lookup requests.
    pub max_concurrent_lookups: usize,
    pub lookup_username: Option<String>,
    pub lookup_password: Option<String>,
    pub inventory_base_url: Option<String>,
    pub inventory_username: Option<String>,
    pub inventory_password: Option<String>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("warranty_base_url", &self.warranty_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .field("lookup_username", &self.lookup_username)
            .field(
                "lookup_password",
                &self.lookup_password.as_ref().map(|_| "[redacted]"),
            )
            .field("inventory_base_url", &self.inventory_base_url)
            .field("inventory_username", &self.inventory_username)
            .field(
                "inventory_password",
                &self.inventory_password.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .finish()
    }
}
