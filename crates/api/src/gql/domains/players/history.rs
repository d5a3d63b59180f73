use indexmap::IndexMap;
use thiserror::Error;

/// Club name to season labels, in the order the clubs appear in the payload.
pub type ClubHistory = IndexMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("malformed history payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode the `history` property of a `PLAYED_TOGETHER` edge.
///
/// Absent and blank payloads are an empty history. Anything that is not a
/// JSON object of string arrays is an error.
pub fn decode_history(raw: Option<&str>) -> Result<ClubHistory, HistoryError> {
    match raw {
        None => Ok(ClubHistory::new()),
        Some(text) if text.is_empty() => Ok(ClubHistory::new()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

/// Like [`decode_history`], but a bad payload reads as "played nowhere
/// together" instead of failing the whole request.
pub fn history_or_empty(raw: Option<&str>) -> ClubHistory {
    decode_history(raw).unwrap_or_default()
}
