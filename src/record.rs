use serde::{Deserialize, Serialize};

/// One input row: a raw extracted term and the category label assigned
/// to it by the upstream NER stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    #[serde(rename = "Readable_Term")]
    pub raw_term: String,
    #[serde(rename = "Label")]
    pub label: String,
}

/// Output row produced when both correction and definition succeeded
/// for the underlying [`TermRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRecord {
    #[serde(rename = "Corrected_Term")]
    pub corrected_term: String,
    #[serde(rename = "NLD")]
    pub definition: String,
    #[serde(rename = "Original_Label")]
    pub label: String,
}

/// Why a record was diverted to the manual review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewReason {
    /// The correction model replied with the unrecognizable-term sentinel.
    #[serde(rename = "Not recognized by LLM")]
    NotRecognized,
    /// A correction or definition call failed.
    #[serde(rename = "Error")]
    CallFailed,
}

impl std::fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewReason::NotRecognized => write!(f, "Not recognized by LLM"),
            ReviewReason::CallFailed => write!(f, "Error"),
        }
    }
}

/// Output row for a record that needs manual inspection. `detail` carries
/// the raw model reply for unrecognized terms, or the error text for
/// failed calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Term_Original")]
    pub original_term: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Reason")]
    pub reason: ReviewReason,
    #[serde(rename = "Detail")]
    pub detail: String,
}

impl ReviewRecord {
    pub fn not_recognized(record: &TermRecord, raw_reply: impl Into<String>) -> Self {
        Self {
            original_term: record.raw_term.clone(),
            label: record.label.clone(),
            reason: ReviewReason::NotRecognized,
            detail: raw_reply.into(),
        }
    }

    pub fn call_failed(record: &TermRecord, error: impl Into<String>) -> Self {
        Self {
            original_term: record.raw_term.clone(),
            label: record.label.clone(),
            reason: ReviewReason::CallFailed,
            detail: error.into(),
        }
    }
}
