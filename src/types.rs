#![allow(missing_docs)]
//! Type definitions for the appraisal engine
//!
//! Wire types mirror the Janice REST responses with defensive defaults, so a
//! single schema-validated decode replaces per-field presence checks. Domain
//! types (`NormalizedAppraisal`, `ItemLine`, `ControlAction`) are what the
//! rest of the crate works with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::CONTROL_ID_SEPARATOR;
use crate::error::{JaniceError, Result};

// =============================================================================
// Wire types (Janice REST responses)
// =============================================================================

/// Market reference embedded in an appraisal response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketRef {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Entry of the live `GET /markets` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketEntry {
    pub id: u32,
    pub name: String,
}

/// Aggregate prices of an appraisal. Janice omits totals it cannot compute;
/// omission decodes as zero, never as a failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectivePrices {
    #[serde(rename = "totalSellPrice")]
    pub total_sell_price: Decimal,
    #[serde(rename = "totalBuyPrice")]
    pub total_buy_price: Decimal,
    #[serde(rename = "totalSplitPrice")]
    pub total_split_price: Decimal,
}

/// Item type reference inside an appraisal item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTypeRef {
    #[serde(default)]
    pub name: String,
}

/// One priced line of an appraisal response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalResponseItem {
    #[serde(rename = "itemType", default)]
    pub item_type: ItemTypeRef,
    #[serde(default)]
    pub amount: u64,
}

/// Raw appraisal response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppraisalResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub market: MarketRef,
    #[serde(rename = "totalVolume", default)]
    pub total_volume: Decimal,
    #[serde(rename = "totalPackagedVolume", default)]
    pub total_packaged_volume: Decimal,
    #[serde(rename = "effectivePrices", default)]
    pub effective_prices: EffectivePrices,
    /// `None` and `[]` both mean "no valid items", a distinct outcome from a
    /// zero-priced appraisal, so normalization turns it into an error rather
    /// than a default.
    #[serde(default)]
    pub items: Option<Vec<AppraisalResponseItem>>,
}

impl AppraisalResponse {
    /// Collapse the partially-optional wire shape into a [`NormalizedAppraisal`].
    ///
    /// # Errors
    ///
    /// Returns a `NoItems` error when the response carries no priced items.
    pub fn normalize(self) -> Result<NormalizedAppraisal> {
        let items = match self.items {
            Some(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| AppraisedItem {
                    name: item.item_type.name,
                    quantity: item.amount,
                })
                .collect(),
            _ => {
                return Err(JaniceError::no_items(
                    "No valid items found in the appraisal",
                ))
            }
        };

        Ok(NormalizedAppraisal {
            code: self.code,
            market_id: self.market.id,
            market_name: self.market.name,
            total_sell: self.effective_prices.total_sell_price,
            total_buy: self.effective_prices.total_buy_price,
            total_split: self.effective_prices.total_split_price,
            total_volume: self.total_volume,
            total_packaged_volume: self.total_packaged_volume,
            items,
        })
    }
}

// =============================================================================
// Domain types
// =============================================================================

/// One appraised item, in the order the service returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppraisedItem {
    pub name: String,
    pub quantity: u64,
}

/// An appraisal response with all optional fields resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedAppraisal {
    pub code: String,
    pub market_id: u32,
    pub market_name: String,
    pub total_sell: Decimal,
    pub total_buy: Decimal,
    pub total_split: Decimal,
    pub total_volume: Decimal,
    pub total_packaged_volume: Decimal,
    pub items: Vec<AppraisedItem>,
}

/// One parsed line of user input: an item name and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub name: String,
    pub quantity: u64,
}

/// Price percentage the service applies to buy-side valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePercentage {
    Full,
    Ninety,
}

impl PricePercentage {
    /// Value of the `pricePercentage` query parameter.
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            Self::Full => "1",
            Self::Ninety => "0.9",
        }
    }
}

impl fmt::Display for PricePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "100%"),
            Self::Ninety => write!(f, "90%"),
        }
    }
}

// =============================================================================
// Control identifiers
// =============================================================================

/// Which aggregate value a copy control carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyKind {
    Sell,
    Buy,
    Split,
    Buy90,
}

impl CopyKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Sell => "sell",
            Self::Buy => "buy",
            Self::Split => "split",
            Self::Buy90 => "buy90",
        }
    }

    /// Human label for the value this control copies.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sell => "Sell Value",
            Self::Buy => "Buy Value",
            Self::Split => "Split Value",
            Self::Buy90 => "90% Buy Value",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "sell" => Some(Self::Sell),
            "buy" => Some(Self::Buy),
            "split" => Some(Self::Split),
            "buy90" => Some(Self::Buy90),
            _ => None,
        }
    }
}

/// A control identifier decoded into a typed action.
///
/// Platform controls carry a single identifier string; the tag and its
/// arguments are packed as `tag|arg|arg` and decoded exactly once here, at
/// the interaction boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Market selector attached to a cached item list.
    MarketSelect { token: String },
    /// Legacy re-query control carrying the target market inline.
    Appraise { token: String, market_id: u32 },
    /// Redisplay a literal value without any lookup.
    Copy { kind: CopyKind, value: String },
}

impl ControlAction {
    /// Encode into the `tag|arg|arg` identifier embedded in a control.
    #[must_use]
    pub fn encode(&self) -> String {
        let sep = CONTROL_ID_SEPARATOR;
        match self {
            Self::MarketSelect { token } => format!("market_select{sep}{token}"),
            Self::Appraise { token, market_id } => {
                format!("appraise{sep}{token}{sep}{market_id}")
            }
            Self::Copy { kind, value } => format!("copy{sep}{}{sep}{value}", kind.tag()),
        }
    }

    /// Decode a control identifier, validating the tag and argument count.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidControl` error for unknown tags or malformed
    /// argument lists.
    pub fn decode(custom_id: &str) -> Result<Self> {
        let mut parts = custom_id.split(CONTROL_ID_SEPARATOR);
        let tag = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (tag, args.as_slice()) {
            ("market_select", [token]) if !token.is_empty() => Ok(Self::MarketSelect {
                token: (*token).to_string(),
            }),
            ("appraise", [token, market]) if !token.is_empty() => {
                let market_id = market.parse::<u32>().map_err(|e| {
                    JaniceError::with_cause(
                        crate::error::JaniceErrorCode::InvalidControl,
                        format!("Bad market id in control identifier: {market}"),
                        e,
                    )
                })?;
                Ok(Self::Appraise {
                    token: (*token).to_string(),
                    market_id,
                })
            }
            ("copy", [kind, value]) => {
                let kind = CopyKind::from_tag(*kind).ok_or_else(|| {
                    JaniceError::invalid_control(format!("Unknown copy kind: {kind}"))
                })?;
                Ok(Self::Copy {
                    kind,
                    value: (*value).to_string(),
                })
            }
            _ => Err(JaniceError::invalid_control(format!(
                "Unrecognized control identifier: {custom_id}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_action_round_trip() {
        let actions = [
            ControlAction::MarketSelect {
                token: "appr-7".to_string(),
            },
            ControlAction::Appraise {
                token: "appr-7".to_string(),
                market_id: 115,
            },
            ControlAction::Copy {
                kind: CopyKind::Buy90,
                value: "900.00".to_string(),
            },
        ];

        for action in actions {
            let decoded = ControlAction::decode(&action.encode()).unwrap();
            assert_eq!(decoded, action);
        }
    }

    #[test]
    fn test_control_action_rejects_unknown_tag() {
        let err = ControlAction::decode("destroy|appr-1").unwrap_err();
        assert_eq!(err.code, crate::error::JaniceErrorCode::InvalidControl);
    }

    #[test]
    fn test_control_action_rejects_bad_market_id() {
        let err = ControlAction::decode("appraise|appr-1|jita").unwrap_err();
        assert_eq!(err.code, crate::error::JaniceErrorCode::InvalidControl);
    }

    #[test]
    fn test_normalize_defaults_missing_prices_to_zero() {
        let body = r#"{
            "code": "AbCdEf",
            "market": {"id": 2, "name": "Jita 4-4"},
            "items": [{"itemType": {"name": "Tritanium"}, "amount": 100}]
        }"#;
        let response: AppraisalResponse = serde_json::from_str(body).unwrap();
        let normalized = response.normalize().unwrap();

        assert_eq!(normalized.total_sell, Decimal::ZERO);
        assert_eq!(normalized.total_buy, Decimal::ZERO);
        assert_eq!(normalized.total_volume, Decimal::ZERO);
        assert_eq!(normalized.items.len(), 1);
        assert_eq!(normalized.items[0].name, "Tritanium");
    }

    #[test]
    fn test_normalize_empty_items_is_no_items() {
        let body = r#"{"code": "AbCdEf", "items": []}"#;
        let response: AppraisalResponse = serde_json::from_str(body).unwrap();
        let err = response.normalize().unwrap_err();
        assert_eq!(err.code, crate::error::JaniceErrorCode::NoItems);
    }

    #[test]
    fn test_normalize_missing_items_is_no_items() {
        let body = r#"{"code": "AbCdEf"}"#;
        let response: AppraisalResponse = serde_json::from_str(body).unwrap();
        let err = response.normalize().unwrap_err();
        assert_eq!(err.code, crate::error::JaniceErrorCode::NoItems);
    }

    #[test]
    fn test_price_percentage_query_values() {
        assert_eq!(PricePercentage::Full.query_value(), "1");
        assert_eq!(PricePercentage::Ninety.query_value(), "0.9");
    }
}
