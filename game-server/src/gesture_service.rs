use game_core::{GestureResult, HandLandmarks, classify};
use game_types::{GameError, Landmark};
use tracing::{debug, info, warn};

/// Gesture input, gated on whether a landmark detector exists in this deployment.
/// The capability is fixed at startup.
#[derive(Debug, Clone)]
pub struct GestureService {
    available: bool,
}

impl GestureService {
    pub fn new(available: bool) -> Self {
        if available {
            info!("Gesture input enabled");
        } else {
            warn!("Hand detection unavailable, gesture input falls back to keyboard");
        }
        Self { available }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Classify one frame's landmarks. A payload that is not a full hand
    /// counts as no hand rather than an error.
    pub fn classify_frame(
        &self,
        landmarks: Option<Vec<Landmark>>,
    ) -> Result<GestureResult, GameError> {
        if !self.available {
            return Err(GameError::ClassificationUnavailable);
        }

        let hand = landmarks.and_then(|points| match HandLandmarks::try_from(points) {
            Ok(hand) => Some(hand),
            Err(e) => {
                debug!("Discarding landmark payload: {}", e);
                None
            }
        });

        Ok(classify(hand.as_ref()))
    }
}
