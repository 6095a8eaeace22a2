//! Janice provider implementation
//!
//! Provides current appraisal-engine information and context.

use async_trait::async_trait;
use chrono::Utc;

use super::{JaniceProviderTrait, ProviderContext, ProviderResult};
use crate::constants::{DEFAULT_JANICE_API_URL, JITA_MARKET_ID};

/// Appraisal engine context provider
pub struct JaniceProvider;

#[async_trait]
impl JaniceProviderTrait for JaniceProvider {
    fn name(&self) -> &'static str {
        "JANICE_PROVIDER"
    }

    fn description(&self) -> &'static str {
        "Provides current Janice appraisal engine information and context"
    }

    async fn get(&self, context: &ProviderContext) -> ProviderResult {
        let api_url = context.api_url.as_deref().unwrap_or(DEFAULT_JANICE_API_URL);

        let mut features_available = vec!["item_parsing", "appraisal_codes"];
        if context.has_api_key {
            features_available.push("appraisals");
        }
        if context.has_market_list {
            features_available.push("market_selection");
        }

        let features_str = features_available.join(", ");

        ProviderResult {
            text: format!(
                "Connected to Janice at {} (default market: Jita 4-4, id {}). Features available: {}.",
                api_url, JITA_MARKET_ID, features_str
            ),
            values: serde_json::json!({
                "apiUrl": api_url,
                "defaultMarketId": JITA_MARKET_ID,
                "serviceStatus": "active",
                "hasApiKey": context.has_api_key,
                "hasMarketList": context.has_market_list,
                "featuresAvailable": features_available,
            }),
            data: serde_json::json!({
                "timestamp": Utc::now().to_rfc3339(),
                "service": "janice",
            }),
        }
    }
}
