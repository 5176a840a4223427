use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed. Every
/// variable has a default, so a bare environment is valid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let catalog_url = lookup("MEDPARTS_CATALOG_URL").ok();
    let catalog_path = PathBuf::from(or_default("MEDPARTS_CATALOG_PATH", "./data/products.json"));

    let crm_base_url = or_default("MEDPARTS_CRM_BASE_URL", "https://api.hsforms.com");
    let crm_portal_id = or_default("MEDPARTS_CRM_PORTAL_ID", "50431135");
    let crm_form_id = or_default(
        "MEDPARTS_CRM_FORM_ID",
        "fb69ed57-fc12-40db-b754-2d60f1efaf62",
    );

    let whatsapp_number = or_default("MEDPARTS_WHATSAPP_NUMBER", "5214381092435");

    let http_timeout_secs = parse_u64("MEDPARTS_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MEDPARTS_USER_AGENT", "medparts/0.1 (parts-catalog)");
    let search_debounce_ms = parse_u64("MEDPARTS_SEARCH_DEBOUNCE_MS", "300")?;
    let log_level = or_default("MEDPARTS_LOG_LEVEL", "info");

    let page_uri = or_default("MEDPARTS_PAGE_URI", "https://www.bimeg.mx/index.html");
    let page_name = or_default("MEDPARTS_PAGE_NAME", "Página Principal - Contacto");

    Ok(AppConfig {
        catalog_url,
        catalog_path,
        crm_base_url,
        crm_portal_id,
        crm_form_id,
        whatsapp_number,
        http_timeout_secs,
        user_agent,
        search_debounce_ms,
        log_level,
        page_uri,
        page_name,
    })
}
