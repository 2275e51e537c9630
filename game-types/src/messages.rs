use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Difficulty, GameError, Landmark};

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfigureRequest {
    pub difficulty: Option<String>,
    pub personality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfigureResponse {
    pub difficulty: Difficulty,
    pub personality: String,
    pub personality_name: String,
    pub catchphrase: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayRequest {
    #[serde(rename = "move")]
    pub user_move: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GestureRequest {
    pub landmarks: Option<Vec<Landmark>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GestureResponse {
    /// "snake", "water", "gun", "detected", or null when no hand was seen
    pub gesture: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<GameError>,
}

impl From<GameError> for ErrorResponse {
    fn from(error: GameError) -> Self {
        Self {
            error: error.to_string(),
            details: Some(error),
        }
    }
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}
