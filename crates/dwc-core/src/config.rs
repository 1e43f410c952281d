use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false/1/0, got '{other}'"),
            }),
        }
    };

    let warranty_base_url = or_default("DWC_WARRANTY_BASE_URL", "https://qrl.dell.com/");
    let request_timeout_secs = parse_u64("DWC_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("DWC_USER_AGENT", "dwc/0.1 (warranty-lookup)");
    let accept_invalid_certs = parse_bool("DWC_ACCEPT_INVALID_CERTS", "true")?;
    let max_concurrent_lookups = parse_usize("DWC_MAX_CONCURRENT_LOOKUPS", "100")?;

    let lookup_username = lookup("DWC_LOOKUP_USER").ok();
    let lookup_password = lookup("DWC_LOOKUP_PASS").ok();

    let inventory_base_url = lookup("D42_BASE_URL").ok();
    let inventory_username = lookup("D42_USER").ok();
    let inventory_password = lookup("D42_PASS").ok();

    let log_level = or_default("DWC_LOG_LEVEL", "info");

    Ok(AppConfig {
        warranty_base_url,
        request_timeout_secs,
        user_agent,
        accept_invalid_certs,
        max_concurrent_lookups,
        lookup_username,
        lookup_password,
        inventory_base_url,
        inventory_username,
        inventory_password,
        log_level,
    })
}
