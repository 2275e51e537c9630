use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Invalid move '{value}', expected snake, water or gun")]
    InvalidMove { value: String },
    #[error("Unknown personality '{personality}'")]
    InvalidConfig { personality: String },
    #[error("Hand detection is unavailable")]
    ClassificationUnavailable,
}
