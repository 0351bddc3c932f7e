/// Build-time configuration, provided via context at the app root.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL the REST backend is mounted on.
    pub api_base: String,
    /// The access-type page ships against an in-memory store until the
    /// backend integration lands; flip this off to use the REST service.
    pub mock_access_types: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            api_base: option_env!("PBL_API_BASE").unwrap_or("/api").to_string(),
            mock_access_types: option_env!("PBL_MOCK_ACCESS_TYPES")
                .map(|value| value != "false")
                .unwrap_or(true),
        }
    }
}
