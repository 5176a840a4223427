use std::path::PathBuf;

/// Application configuration.
///
/// Every field has a production default, so a bare environment is a valid
/// configuration. CRM identifiers are redacted from `Debug` output.
#[derive(Clone)]
pub struct AppConfig {
    /// Remote catalog document; takes precedence over `catalog_path` when set.
    pub catalog_url: Option<String>,
    pub catalog_path: PathBuf,
    pub crm_base_url: String,
    pub crm_portal_id: String,
    pub crm_form_id: String,
    /// WhatsApp recipient in international format without `+`, e.g. `"5214381092435"`.
    pub whatsapp_number: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    pub search_debounce_ms: u64,
    pub log_level: String,
    /// `context.pageUri` reported with CRM submissions.
    pub page_uri: String,
    /// `context.pageName` reported with CRM submissions.
    pub page_name: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("catalog_url", &self.catalog_url)
            .field("catalog_path", &self.catalog_path)
            .field("crm_base_url", &self.crm_base_url)
            .field("crm_portal_id", &"[redacted]")
            .field("crm_form_id", &"[redacted]")
            .field("whatsapp_number", &self.whatsapp_number)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("log_level", &self.log_level)
            .field("page_uri", &self.page_uri)
            .field("page_name", &self.page_name)
            .finish()
    }
}
