#![allow(missing_docs)]
//! NPC buy flows
//!
//! Single-query valuation against the NPC buy market. Only the buy value is
//! populated; the `npcbuy90` variant adds a locally computed 90% figure
//! (there is no second fetch to take it from).

use crate::constants::NPC_MARKET_ID;
use crate::display::{self, DisplayResult};
use crate::error::Result;
use crate::parser;
use crate::service::JaniceService;
use crate::types::PricePercentage;

/// Value item text against NPC buy orders.
pub async fn npc_buy(
    service: &JaniceService,
    raw_text: &str,
    include_ninety: bool,
) -> Result<DisplayResult> {
    let payload = parser::parse(raw_text)?;
    let appraisal = service
        .client()
        .appraise(&payload, PricePercentage::Full, NPC_MARKET_ID)
        .await?;

    Ok(display::assemble_npc_buy(&appraisal, include_ninety))
}
