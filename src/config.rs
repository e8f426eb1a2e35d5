//! Configuration types.

/// Target criteria a lead is qualified against.
///
/// All three sets are free-form strings chosen by the operator and are used
/// verbatim inside prompt text — no validation of content.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    /// Industries the sales team is targeting.
    pub industries: Vec<String>,
    /// Company size bands the sales team is targeting.
    pub company_sizes: Vec<String>,
    /// Geographic regions the sales team is targeting.
    pub regions: Vec<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            industries: vec!["Technology".to_string(), "Healthcare".to_string()],
            company_sizes: vec!["SMB (51-500)".to_string(), "Enterprise (500+)".to_string()],
            regions: vec!["North America".to_string(), "Europe".to_string()],
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct QualifierConfig {
    /// Model identifier passed to the LLM provider.
    pub model: String,
    /// HTTP listen port.
    pub port: u16,
    /// Target criteria for scoring.
    pub target: TargetConfig,
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            port: 8080,
            target: TargetConfig::default(),
        }
    }
}

impl QualifierConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `LEAD_QUALIFY_MODEL` — model identifier
    /// - `LEAD_QUALIFY_PORT` — listen port
    /// - `LEAD_QUALIFY_INDUSTRIES` / `LEAD_QUALIFY_COMPANY_SIZES` /
    ///   `LEAD_QUALIFY_REGIONS` — comma-separated target criteria
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let model =
            std::env::var("LEAD_QUALIFY_MODEL").unwrap_or(defaults.model);

        let port: u16 = std::env::var("LEAD_QUALIFY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let target = TargetConfig {
            industries: env_list("LEAD_QUALIFY_INDUSTRIES")
                .unwrap_or(defaults.target.industries),
            company_sizes: env_list("LEAD_QUALIFY_COMPANY_SIZES")
                .unwrap_or(defaults.target.company_sizes),
            regions: env_list("LEAD_QUALIFY_REGIONS").unwrap_or(defaults.target.regions),
        };

        Self { model, port, target }
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|raw| parse_list(&raw))
}

/// Split a comma-separated value into trimmed, non-empty entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
