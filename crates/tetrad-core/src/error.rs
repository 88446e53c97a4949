use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("response {value} for item '{item_id}' is outside the 1-5 scale")]
    LikertOutOfRange { item_id: String, value: u8 },

    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("invalid gender code: {0} (expected 1 or 2)")]
    InvalidGender(u8),

    #[error("age {0} is out of range (10-100)")]
    AgeOutOfRange(u8),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
