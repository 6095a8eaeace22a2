#![allow(missing_docs)]
//! Recall flow
//!
//! Re-fetches a previously persisted appraisal by its code. The code itself
//! is cached behind a fresh interaction token so the market selector on a
//! recalled result works exactly like one on a freshly parsed list.

use crate::display::{self, DisplayResult};
use crate::error::{JaniceError, Result};
use crate::service::JaniceService;

use super::interactions::looks_like_code;

/// Recall an appraisal by its 6-character code.
pub async fn recall(service: &JaniceService, code: &str) -> Result<DisplayResult> {
    let code = code.trim();
    if code.is_empty() {
        return Err(JaniceError::empty_input(
            "Please provide an appraisal code to recall.",
        ));
    }
    // the code goes into the request path; anything but one code-sized
    // alphanumeric word would address a different endpoint
    if !looks_like_code(code) {
        return Err(JaniceError::empty_input(
            "Appraisal codes are 6 letters or digits.",
        ));
    }

    let appraisal = service.client().appraise_by_code(code).await?;
    let token = service.cache().put(code);

    Ok(display::assemble_recalled(
        &appraisal,
        Some(&token),
        &service.markets().offerable(),
    ))
}
