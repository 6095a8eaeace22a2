#![allow(missing_docs)]

pub const DEFAULT_JANICE_API_URL: &str = "https://janice.e-351.com/api/rest/v2";
pub const JANICE_API_KEY_HEADER: &str = "X-ApiKey";

pub const JANICE_SERVICE_NAME: &str = "janice";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Jita 4-4, the primary trade hub and the default appraisal market.
pub const JITA_MARKET_ID: u32 = 2;
/// The NPC buy market used by the `npcbuy` / `npcbuy90` flows.
pub const NPC_MARKET_ID: u32 = 6;

/// Janice only hands out persistent appraisal codes of this length.
pub const APPRAISAL_CODE_LEN: usize = 6;

/// Chat platforms cap control titles; anything longer is cut with an ellipsis.
pub const MAX_CONTROL_TITLE_LEN: usize = 256;

/// Prefix for interaction tokens handed out by the token cache.
pub const TOKEN_PREFIX: &str = "appr-";
/// Separator between the action tag and its arguments in control identifiers.
pub const CONTROL_ID_SEPARATOR: char = '|';

/// Default capacity of the bounded interaction token cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;
