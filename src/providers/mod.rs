//! Janice providers
//!
//! Provides context data about the appraisal engine for the host agent.

mod janice;

pub use janice::JaniceProvider;

use async_trait::async_trait;
use serde_json::Value;

/// Provider context containing runtime settings.
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    /// Janice API URL
    pub api_url: Option<String>,
    /// Whether an API key is configured
    pub has_api_key: bool,
    /// Whether the live market list was fetched
    pub has_market_list: bool,
}

/// Result from a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResult {
    /// Human-readable text
    pub text: String,
    /// Key-value pairs for template substitution
    pub values: Value,
    /// Structured data
    pub data: Value,
}

impl Default for ProviderResult {
    fn default() -> Self {
        Self {
            text: String::new(),
            values: serde_json::json!({}),
            data: serde_json::json!({}),
        }
    }
}

/// Trait for appraisal providers.
#[async_trait]
pub trait JaniceProviderTrait: Send + Sync {
    /// Returns the provider name.
    fn name(&self) -> &'static str;

    /// Returns the provider description.
    fn description(&self) -> &'static str;

    /// Gets the provider data.
    async fn get(&self, context: &ProviderContext) -> ProviderResult;
}

/// Returns all available providers.
pub fn get_providers() -> Vec<Box<dyn JaniceProviderTrait>> {
    vec![Box::new(JaniceProvider)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_providers() {
        let providers = get_providers();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name(), "JANICE_PROVIDER");
    }
}
