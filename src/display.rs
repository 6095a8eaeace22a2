#![allow(missing_docs)]
//! Result assembly
//!
//! Converts normalized appraisals into a display-ready result: aggregate
//! values, volumes, the per-item breakdown, reusable codes, and the follow-up
//! controls (market selector, value-copy buttons) the host renders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::constants::MAX_CONTROL_TITLE_LEN;
use crate::types::{ControlAction, CopyKind, NormalizedAppraisal};

/// Aggregate values of an assembled result. `buy` is always present; the
/// others depend on the flow (NPC-buy results are buy-only).
#[derive(Debug, Clone)]
pub struct AppraisalTotals {
    pub sell: Option<Decimal>,
    pub buy: Decimal,
    pub split: Option<Decimal>,
    pub buy_90: Option<Decimal>,
}

/// One option of the market selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketOption {
    pub id: u32,
    pub name: String,
    pub selected: bool,
}

/// A follow-up control carried by a result. The host renders these; the
/// identifiers come back through `actions::handle_interaction`.
#[derive(Debug, Clone)]
pub enum Control {
    MarketSelect {
        custom_id: String,
        options: Vec<MarketOption>,
    },
    CopyButton {
        custom_id: String,
        label: String,
    },
}

/// Display-ready appraisal result. Derived, never stored.
#[derive(Debug, Clone)]
pub struct DisplayResult {
    pub title: String,
    pub market_name: String,
    pub totals: AppraisalTotals,
    pub total_volume: Decimal,
    pub total_packaged_volume: Decimal,
    /// One `name: quantity` line per item, service order.
    pub item_breakdown: String,
    pub code: String,
    /// Present only when a paired 90% query was actually made.
    pub ninety_code: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub controls: Vec<Control>,
}

/// Truncate a free-form title to the platform limit, marking the cut.
#[must_use]
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_CONTROL_TITLE_LEN {
        return title.to_string();
    }
    let cut: String = title.chars().take(MAX_CONTROL_TITLE_LEN - 3).collect();
    format!("{cut}...")
}

fn ninety_of(buy: Decimal) -> Decimal {
    buy * Decimal::new(9, 1)
}

fn breakdown(appraisal: &NormalizedAppraisal) -> String {
    appraisal
        .items
        .iter()
        .map(|item| format!("{}: {}", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

fn market_name(appraisal: &NormalizedAppraisal) -> String {
    if appraisal.market_name.is_empty() {
        format!("Market {}", appraisal.market_id)
    } else {
        appraisal.market_name.clone()
    }
}

fn market_select_control(
    token: &str,
    offerable: &[(u32, String)],
    selected_id: u32,
) -> Option<Control> {
    if offerable.is_empty() {
        return None;
    }
    let options = offerable
        .iter()
        .map(|(id, name)| MarketOption {
            id: *id,
            name: name.clone(),
            selected: *id == selected_id,
        })
        .collect();
    Some(Control::MarketSelect {
        custom_id: ControlAction::MarketSelect {
            token: token.to_string(),
        }
        .encode(),
        options,
    })
}

/// One copy button per present aggregate value, the literal value embedded in
/// the identifier so activation needs no lookup.
fn copy_controls(totals: &AppraisalTotals) -> Vec<Control> {
    let mut controls = Vec::new();
    let mut push = |kind: CopyKind, value: Decimal| {
        controls.push(Control::CopyButton {
            custom_id: ControlAction::Copy {
                kind,
                value: value.to_string(),
            }
            .encode(),
            label: kind.label().to_string(),
        });
    };

    if let Some(sell) = totals.sell {
        push(CopyKind::Sell, sell);
    }
    push(CopyKind::Buy, totals.buy);
    if let Some(split) = totals.split {
        push(CopyKind::Split, split);
    }
    if let Some(buy_90) = totals.buy_90 {
        push(CopyKind::Buy90, buy_90);
    }
    controls
}

/// Assemble the paired-query result.
///
/// The 90% buy value is the separately fetched `ninety` result's buy value,
/// never `full.buy * 0.9`; the two coincide only when the service's discount
/// model is exactly linear.
#[must_use]
pub fn assemble_pair(
    full: &NormalizedAppraisal,
    ninety: &NormalizedAppraisal,
    title: &str,
    token: Option<&str>,
    offerable: &[(u32, String)],
) -> DisplayResult {
    let totals = AppraisalTotals {
        sell: Some(full.total_sell),
        buy: full.total_buy,
        split: Some(full.total_split),
        buy_90: Some(ninety.total_buy),
    };

    let mut controls = Vec::new();
    if let Some(token) = token {
        if let Some(select) = market_select_control(token, offerable, full.market_id) {
            controls.push(select);
        }
    }
    controls.extend(copy_controls(&totals));

    DisplayResult {
        title: truncate_title(title),
        market_name: market_name(full),
        totals,
        total_volume: full.total_volume,
        total_packaged_volume: full.total_packaged_volume,
        item_breakdown: breakdown(full),
        code: full.code.clone(),
        ninety_code: Some(ninety.code.clone()),
        timestamp: Utc::now(),
        controls,
    }
}

/// Assemble a recalled appraisal: one query, all four values shown, the 90%
/// figure computed locally.
#[must_use]
pub fn assemble_recalled(
    appraisal: &NormalizedAppraisal,
    token: Option<&str>,
    offerable: &[(u32, String)],
) -> DisplayResult {
    let totals = AppraisalTotals {
        sell: Some(appraisal.total_sell),
        buy: appraisal.total_buy,
        split: Some(appraisal.total_split),
        buy_90: Some(ninety_of(appraisal.total_buy)),
    };

    let mut controls = Vec::new();
    if let Some(token) = token {
        if let Some(select) = market_select_control(token, offerable, appraisal.market_id) {
            controls.push(select);
        }
    }
    controls.extend(copy_controls(&totals));

    DisplayResult {
        title: truncate_title("Recalled Appraisal"),
        market_name: market_name(appraisal),
        totals,
        total_volume: appraisal.total_volume,
        total_packaged_volume: appraisal.total_packaged_volume,
        item_breakdown: breakdown(appraisal),
        code: appraisal.code.clone(),
        ninety_code: None,
        timestamp: Utc::now(),
        controls,
    }
}

/// Assemble an NPC-buy result: buy value only, the 90% figure computed
/// locally when requested.
#[must_use]
pub fn assemble_npc_buy(appraisal: &NormalizedAppraisal, include_ninety: bool) -> DisplayResult {
    let totals = AppraisalTotals {
        sell: None,
        buy: appraisal.total_buy,
        split: None,
        buy_90: include_ninety.then(|| ninety_of(appraisal.total_buy)),
    };
    let controls = copy_controls(&totals);

    DisplayResult {
        title: truncate_title("NPC Buy Appraisal"),
        market_name: market_name(appraisal),
        totals,
        total_volume: appraisal.total_volume,
        total_packaged_volume: appraisal.total_packaged_volume,
        item_breakdown: breakdown(appraisal),
        code: appraisal.code.clone(),
        ninety_code: None,
        timestamp: Utc::now(),
        controls,
    }
}
