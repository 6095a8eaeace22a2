#![allow(missing_docs)]
//! Full appraisal flow
//!
//! Parses user text, caches the canonical payload behind an interaction
//! token, issues the paired full/90% queries and assembles the result with
//! its follow-up controls.

use crate::constants::JITA_MARKET_ID;
use crate::display::{self, DisplayResult};
use crate::error::Result;
use crate::parser;
use crate::service::JaniceService;

/// Appraise free-form item text at the given market (default: Jita 4-4).
///
/// # Errors
///
/// `EmptyInput` when nothing parses, any client error otherwise.
pub async fn appraise_items(
    service: &JaniceService,
    raw_text: &str,
    market_id: Option<u32>,
) -> Result<DisplayResult> {
    let payload = parser::parse(raw_text)?;
    appraise_payload(
        service,
        &payload,
        market_id.unwrap_or(JITA_MARKET_ID),
        None,
    )
    .await
}

/// Appraise an already-canonical payload, reusing an existing interaction
/// token when a follow-up control replays a cached list.
pub(crate) async fn appraise_payload(
    service: &JaniceService,
    payload: &str,
    market_id: u32,
    reuse_token: Option<&str>,
) -> Result<DisplayResult> {
    let token = match reuse_token {
        Some(token) => token.to_string(),
        None => service.cache().put(payload),
    };

    let (full, ninety) = service.client().appraise_pair(payload, market_id).await?;

    Ok(display::assemble_pair(
        &full,
        &ninety,
        "Total Appraisal",
        Some(&token),
        &service.markets().offerable(),
    ))
}
