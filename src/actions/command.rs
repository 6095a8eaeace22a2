#![allow(missing_docs)]
//! Typed chat-command boundary
//!
//! The host gateway only matches message prefixes; everything after that is
//! typed here. `Command::parse` turns a raw message into a command value and
//! `run_command` dispatches it to the matching flow.

use crate::display::DisplayResult;
use crate::error::Result;
use crate::service::JaniceService;

use super::{appraise_items, help_text, npc_buy, recall};

/// A recognized chat command with its argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Appraise { items: String },
    NpcBuy { items: String },
    NpcBuy90 { items: String },
    Recall { code: String },
    Help,
}

impl Command {
    /// Parse a raw message. Returns `None` for anything that is not an
    /// appraisal command, so the host can ignore unrelated chatter.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        let content = content.trim_start();
        // longest prefix first: "!npcbuy" is a prefix of "!npcbuy90"
        if let Some(rest) = content.strip_prefix("!npcbuy90") {
            return Some(Self::NpcBuy90 {
                items: rest.trim().to_string(),
            });
        }
        if let Some(rest) = content.strip_prefix("!npcbuy") {
            return Some(Self::NpcBuy {
                items: rest.trim().to_string(),
            });
        }
        if let Some(rest) = content.strip_prefix("!appraise") {
            return Some(Self::Appraise {
                items: rest.trim().to_string(),
            });
        }
        if let Some(rest) = content.strip_prefix("!recall") {
            return Some(Self::Recall {
                code: rest.trim().to_string(),
            });
        }
        if content.trim_end() == "!help" {
            return Some(Self::Help);
        }
        None
    }
}

/// Reply produced by a command: an assembled appraisal or plain text.
#[derive(Debug, Clone)]
pub enum CommandReply {
    Appraisal(DisplayResult),
    Text(String),
}

/// Run a parsed command against the service.
///
/// # Errors
///
/// Every flow error surfaces here; the host renders it as a short message
/// and keeps the event loop alive.
pub async fn run_command(service: &JaniceService, command: Command) -> Result<CommandReply> {
    match command {
        Command::Appraise { items } => appraise_items(service, &items, None)
            .await
            .map(CommandReply::Appraisal),
        Command::NpcBuy { items } => npc_buy(service, &items, false)
            .await
            .map(CommandReply::Appraisal),
        Command::NpcBuy90 { items } => npc_buy(service, &items, true)
            .await
            .map(CommandReply::Appraisal),
        Command::Recall { code } => recall(service, &code).await.map(CommandReply::Appraisal),
        Command::Help => Ok(CommandReply::Text(help_text())),
    }
}
