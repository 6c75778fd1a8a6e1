//! Term correction stage.
//!
//! Wraps the [`TextGenerator`] capability with the fixed system instruction
//! and prompt template that normalize one raw geology term. Correction
//! logic is entirely delegated to the model; the only post-processing here
//! is edge-whitespace trimming and the sentinel comparison.

use crate::gemini::{GeminiError, TextGenerator};

/// Literal the correction model returns for unrecognizable terms.
/// Shared by the prompt text and the comparison so the two cannot drift.
pub const UNKNOWN_TERM_SENTINEL: &str = "UNKNOWN_TERM";

const CORRECTION_SYSTEM_INSTRUCTION: &str = "You are a data processing assistant specializing \
     in correcting and standardizing technical terms from the geology domain.";

/// Outcome of a correction call that completed at the model level.
/// Transport and API failures surface as `Err(GeminiError)` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// The model produced a corrected (or pass-through) term.
    Corrected(String),
    /// The model explicitly reported the term as unrecognizable.
    Unrecognized,
}

/// Correct and standardize one raw term.
///
/// Returns [`Correction::Unrecognized`] on a trimmed exact match against
/// the sentinel literal, otherwise the trimmed model reply.
pub async fn correct_term(
    client: &impl TextGenerator,
    raw_term: &str,
) -> Result<Correction, GeminiError> {
    let reply = client
        .generate(CORRECTION_SYSTEM_INSTRUCTION, &correction_prompt(raw_term))
        .await?;
    let trimmed = reply.trim();
    if trimmed == UNKNOWN_TERM_SENTINEL {
        Ok(Correction::Unrecognized)
    } else {
        Ok(Correction::Corrected(trimmed.to_string()))
    }
}

fn correction_prompt(raw_term: &str) -> String {
    format!(
        "Your task is to correct and format the following technical term according to strict \
         geological and petroleum domain standards. Follow these rules precisely:\n\
         \n\
         1. If the term is a concatenated phrase, separate the words \
         (e.g., \"carbonatemounds\" -> \"carbonate mounds\").\n\
         2. If the term contains an obvious typo, correct it.\n\
         3. If the term is already correct and well-formatted, return it unchanged.\n\
         4. If the term is nonsensical or unrecognizable return the exact string \
         \"{UNKNOWN_TERM_SENTINEL}\".\n\
         \n\
         Your response must contain ONLY the corrected term or the \
         \"{UNKNOWN_TERM_SENTINEL}\" flag.\n\
         \n\
         Term to be corrected:\n\
         \"{raw_term}\""
    )
}
