#![allow(missing_docs)]
//! Follow-up interaction handling
//!
//! Control identifiers come back from the platform as opaque strings; they
//! are decoded exactly once here into a [`ControlAction`] and dispatched.
//! Market switches resolve their token through the cache (expanding a cached
//! appraisal code first when needed) and replay the paired appraisal at the
//! newly chosen market.

use crate::constants::APPRAISAL_CODE_LEN;
use crate::display::DisplayResult;
use crate::error::{JaniceError, Result};
use crate::parser;
use crate::service::JaniceService;
use crate::types::{ControlAction, CopyKind};

use super::appraise::appraise_payload;

/// What an interaction produced: a re-queried appraisal to display, or a
/// literal value to redisplay (copy controls never re-query).
#[derive(Debug, Clone)]
pub enum InteractionOutcome {
    Appraisal(DisplayResult),
    CopiedValue { kind: CopyKind, value: String },
}

/// Handle an activated control.
///
/// `selected_values` carries the platform's selection payload (the chosen
/// market id for a selector; empty for buttons).
///
/// # Errors
///
/// `InvalidControl` for undecodable identifiers, `TokenNotFound` for stale
/// tokens, plus any client error from the replayed queries. All are
/// user-visible; none crash the event loop.
pub async fn handle_interaction(
    service: &JaniceService,
    custom_id: &str,
    selected_values: &[String],
) -> Result<InteractionOutcome> {
    match ControlAction::decode(custom_id)? {
        ControlAction::MarketSelect { token } => {
            let market_id = selected_values
                .first()
                .and_then(|v| v.parse::<u32>().ok())
                .ok_or_else(|| {
                    JaniceError::invalid_control("Market selector carried no market id")
                })?;
            switch_market(service, &token, market_id).await
        }
        ControlAction::Appraise { token, market_id } => {
            switch_market(service, &token, market_id).await
        }
        ControlAction::Copy { kind, value } => Ok(InteractionOutcome::CopiedValue { kind, value }),
    }
}

async fn switch_market(
    service: &JaniceService,
    token: &str,
    market_id: u32,
) -> Result<InteractionOutcome> {
    let payload = resolve_payload(service, token).await?;
    let result = appraise_payload(service, &payload, market_id, Some(token)).await?;
    Ok(InteractionOutcome::Appraisal(result))
}

/// Heuristic: a cached payload that is exactly one appraisal-code-sized
/// alphanumeric word is a code to re-expand, not an item list. Parsed
/// payloads always contain a tab (`name\t1`), so only payloads cached
/// verbatim as codes match; a 6-character item name cached by some future
/// caller would still be misread.
pub(crate) fn looks_like_code(payload: &str) -> bool {
    payload.len() == APPRAISAL_CODE_LEN && payload.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Resolve an interaction token back to a canonical payload, expanding a
/// cached appraisal code through the service first.
async fn resolve_payload(service: &JaniceService, token: &str) -> Result<String> {
    let cached = service.cache().get(token).ok_or_else(|| {
        JaniceError::token_not_found(
            "Could not retrieve items from cache; please re-run the original command.",
        )
    })?;

    if looks_like_code(&cached) {
        let appraisal = service.client().appraise_by_code(&cached).await?;
        return Ok(parser::items_to_payload(&appraisal.items));
    }
    Ok(cached)
}
