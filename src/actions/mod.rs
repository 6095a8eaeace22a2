#![allow(missing_docs)]

mod appraise;
mod command;
mod help;
mod interactions;
mod npc_buy;
mod recall;

pub use appraise::*;
pub use command::*;
pub use help::*;
pub use interactions::*;
pub use npc_buy::*;
pub use recall::*;
