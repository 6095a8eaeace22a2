#![allow(missing_docs)]
//! Help text for the appraisal commands.

/// Usage text the host sends in response to `!help`.
#[must_use]
pub fn help_text() -> String {
    [
        "**Appraisal commands**",
        "`!appraise <items>`: price an item list at Jita 4-4 (one item per line, quantity after the name)",
        "`!npcbuy <items>`: value an item list against NPC buy orders",
        "`!npcbuy90 <items>`: NPC buy value with a 90% figure",
        "`!recall <code>`: look up a previous appraisal by its code",
        "`!help`: this text",
        "",
        "Use the market selector under a result to re-price the same items at another hub.",
    ]
    .join("\n")
}
