use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTOBOUND_URL: &str =
    "https://api.autobound.ai/api/external/generate-insights/v1.1";
pub const DEFAULT_PREDICTLEADS_URL: &str = "https://predictleads.com/api";
pub const DEFAULT_YOU_URL: &str = "https://api.ydc-index.io/search";

/// Base URLs of the three upstream providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
    pub autobound: String,
    pub predict_leads: String,
    pub you: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            autobound: DEFAULT_AUTOBOUND_URL.to_string(),
            predict_leads: DEFAULT_PREDICTLEADS_URL.to_string(),
            you: DEFAULT_YOU_URL.to_string(),
        }
    }
}

impl ProviderEndpoints {
    /// Defaults, overridden by `PROSPECT_AUTOBOUND_URL`,
    /// `PROSPECT_PREDICTLEADS_URL` and `PROSPECT_YOU_URL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            autobound: pick("PROSPECT_AUTOBOUND_URL", DEFAULT_AUTOBOUND_URL),
            predict_leads: pick("PROSPECT_PREDICTLEADS_URL", DEFAULT_PREDICTLEADS_URL),
            you: pick("PROSPECT_YOU_URL", DEFAULT_YOU_URL),
        }
    }
}
