use std::collections::HashMap;
use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// A provider secret the adapters may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Secret {
    AutoboundApiKey,
    PredictLeadsApiKey,
    PredictLeadsApiToken,
    YouApiKey,
}

impl Secret {
    /// Environment variable the secret is read from.
    pub fn env_var(self) -> &'static str {
        match self {
            Secret::AutoboundApiKey => "AUTOBOUND_API_KEY",
            Secret::PredictLeadsApiKey => "PREDICTLEADS_API_KEY",
            Secret::PredictLeadsApiToken => "PREDICTLEADS_API_TOKEN",
            Secret::YouApiKey => "YOU_API_KEY",
        }
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

/// Read-only set of provider secrets.
///
/// A secret that is absent (or set to an empty string) is not an error until
/// a tool that needs it is invoked.
#[derive(Clone, Default)]
pub struct Credentials {
    values: HashMap<Secret, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every known secret from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the set from an arbitrary name lookup, e.g. a parsed `.env`
    /// file or a test fixture.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Secret::iter().fold(Self::new(), |creds, secret| match lookup(secret.env_var()) {
            Some(value) => creds.with(secret, value),
            None => creds,
        })
    }

    #[must_use]
    pub fn with(mut self, secret: Secret, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&secret);
        } else {
            self.values.insert(secret, value);
        }
        self
    }

    pub fn get(&self, secret: Secret) -> Option<&str> {
        self.values.get(&secret).map(String::as_str)
    }

    pub fn is_configured(&self, secret: Secret) -> bool {
        self.values.contains_key(&secret)
    }

    /// Secrets that are currently absent, in declaration order.
    pub fn missing(&self) -> Vec<Secret> {
        Secret::iter()
            .filter(|secret| !self.is_configured(*secret))
            .collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configured: Vec<&'static str> = Secret::iter()
            .filter(|secret| self.is_configured(*secret))
            .map(Secret::env_var)
            .collect();
        f.debug_struct("Credentials")
            .field("configured", &configured)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_populates_known_secrets() {
        let creds = Credentials::from_lookup(|name| match name {
            "YOU_API_KEY" => Some("you-key".to_string()),
            "PREDICTLEADS_API_KEY" => Some("pl-key".to_string()),
            _ => None,
        });

        assert_eq!(creds.get(Secret::YouApiKey), Some("you-key"));
        assert_eq!(creds.get(Secret::PredictLeadsApiKey), Some("pl-key"));
        assert_eq!(creds.get(Secret::PredictLeadsApiToken), None);
        assert_eq!(
            creds.missing(),
            vec![Secret::AutoboundApiKey, Secret::PredictLeadsApiToken]
        );
    }

    #[test]
    fn empty_values_count_as_absent() {
        let creds = Credentials::new()
            .with(Secret::AutoboundApiKey, "k")
            .with(Secret::AutoboundApiKey, "");
        assert!(!creds.is_configured(Secret::AutoboundApiKey));

        let creds = Credentials::from_lookup(|_| Some(String::new()));
        assert_eq!(creds.missing().len(), 4);
    }

    #[test]
    fn debug_output_never_contains_secret_values() {
        let creds = Credentials::new().with(Secret::YouApiKey, "super-secret-value");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("YOU_API_KEY"));
        assert!(!rendered.contains("super-secret-value"));
    }
}
