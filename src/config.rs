// Settings that control the fixed parts of the generated Swagger document.

/// Title written to `info.title`.
pub const DEFAULT_TITLE: &str = "Riot API";

/// Terms of service URL written to `info.termsOfService`.
pub const DEFAULT_TERMS_OF_SERVICE: &str =
    "https://developer.riotgames.com/terms-and-conditions.html";

/// Templated host; `{platform}` is one of the `x-host-platform` values.
pub const DEFAULT_HOST: &str = "{platform}.api.riotgames.com";

/// What to do when two methods map to the same path and verb, or two DTOs
/// map to the same definition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Later entries replace earlier ones; a warning is logged.
    #[default]
    Overwrite,
    /// Fail the conversion on the first duplicate.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub title: String,
    pub terms_of_service: String,
    pub host: String,
    pub conflict_policy: ConflictPolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        ConverterConfig {
            title: DEFAULT_TITLE.to_string(),
            terms_of_service: DEFAULT_TERMS_OF_SERVICE.to_string(),
            host: DEFAULT_HOST.to_string(),
            conflict_policy: ConflictPolicy::Overwrite,
        }
    }
}
