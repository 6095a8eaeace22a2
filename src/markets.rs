#![allow(missing_docs)]
//! Trade hub directory
//!
//! Keeps the fixed table of well-known hubs and the live market list fetched
//! from the service at startup. The hubs offered as selector options are the
//! intersection of the two, so a hub the service stops pricing silently drops
//! out of the controls.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::MarketEntry;

/// Well-known trade hubs, in the order they are offered as controls.
pub const WELL_KNOWN_HUBS: &[(u32, &str)] = &[
    (2, "Jita 4-4"),
    (6, "NPC"),
    (115, "Amarr"),
    (116, "Dodixie"),
    (117, "Rens"),
    (118, "Hek"),
];

/// Shared directory of markets known to the pricing service.
#[derive(Default)]
pub struct MarketDirectory {
    live: RwLock<HashMap<u32, String>>,
}

impl MarketDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live market list with a freshly fetched one.
    pub fn update(&self, markets: Vec<MarketEntry>) {
        let mut live = self.live.write().unwrap_or_else(|e| e.into_inner());
        *live = markets.into_iter().map(|m| (m.id, m.name)).collect();
    }

    /// Hubs offerable as selector options: the well-known table intersected
    /// with the live list, table order preserved. Before the first live fetch
    /// the intersection is empty and no selector is offered.
    #[must_use]
    pub fn offerable(&self) -> Vec<(u32, String)> {
        let live = self.live.read().unwrap_or_else(|e| e.into_inner());
        WELL_KNOWN_HUBS
            .iter()
            .filter(|(id, _)| live.contains_key(id))
            .map(|(id, name)| (*id, (*name).to_string()))
            .collect()
    }

    /// Display name for a market id, falling back to the live list and then
    /// to a generic label.
    #[must_use]
    pub fn display_name(&self, market_id: u32) -> String {
        if let Some((_, name)) = WELL_KNOWN_HUBS.iter().find(|(id, _)| *id == market_id) {
            return (*name).to_string();
        }
        let live = self.live.read().unwrap_or_else(|e| e.into_inner());
        live.get(&market_id)
            .cloned()
            .unwrap_or_else(|| format!("Market {market_id}"))
    }
}
