//! Single-frame hand gesture classification.
//!
//! Maps one hand's 21 landmarks to a game move using finger fold state:
//! a closed fist is Gun, an open palm is Water and a V-sign is Snake. There
//! is no smoothing across frames and no randomness here.

use game_types::{Landmark, Move};
use tracing::trace;

pub const LANDMARK_COUNT: usize = 21;

/// Anatomical landmark indices used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandJoint {
    Wrist = 0,
    ThumbMcp = 2,
    ThumbTip = 4,
    IndexPip = 6,
    IndexTip = 8,
    MiddlePip = 10,
    MiddleTip = 12,
    RingPip = 14,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyTip = 20,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LandmarkError {
    #[error("expected 21 landmarks, got {0}")]
    WrongCount(usize),
}

/// The landmark set for one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn joint(&self, joint: HandJoint) -> Landmark {
        self.points[joint as usize]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = LandmarkError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let count = points.len();
        let points: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongCount(count))?;
        Ok(Self::new(points))
    }
}

/// The four non-thumb fingers, each judged by its tip and PIP joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(&self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexTip,
            Finger::Middle => HandJoint::MiddleTip,
            Finger::Ring => HandJoint::RingTip,
            Finger::Pinky => HandJoint::PinkyTip,
        }
    }

    pub fn pip(&self) -> HandJoint {
        match self {
            Finger::Index => HandJoint::IndexPip,
            Finger::Middle => HandJoint::MiddlePip,
            Finger::Ring => HandJoint::RingPip,
            Finger::Pinky => HandJoint::PinkyPip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResult {
    Move(Move),
    /// A hand is present but its shape is not a recognised move
    Ambiguous,
    NoHand,
}

impl GestureResult {
    /// Wire label: the move name, "detected" for an unclear hand, or none
    pub fn label(&self) -> Option<&'static str> {
        match self {
            GestureResult::Move(m) => Some(m.as_str()),
            GestureResult::Ambiguous => Some("detected"),
            GestureResult::NoHand => None,
        }
    }

    pub fn as_move(&self) -> Option<Move> {
        match self {
            GestureResult::Move(m) => Some(*m),
            _ => None,
        }
    }
}

/// A folded finger's tip sits below its PIP joint (image y grows downward).
pub fn is_folded(hand: &HandLandmarks, finger: Finger) -> bool {
    hand.joint(finger.tip()).y > hand.joint(finger.pip()).y
}

/// Thumb tucked across the palm: its tip is closer to the pinky MCP than its own MCP is.
pub fn is_thumb_folded(hand: &HandLandmarks) -> bool {
    let pinky_mcp = hand.joint(HandJoint::PinkyMcp).x;
    let tip = hand.joint(HandJoint::ThumbTip).x;
    let mcp = hand.joint(HandJoint::ThumbMcp).x;
    (tip - pinky_mcp).abs() < (mcp - pinky_mcp).abs()
}

/// Classify whatever the detector produced for this frame.
pub fn classify(landmarks: Option<&HandLandmarks>) -> GestureResult {
    match landmarks {
        Some(hand) => classify_hand(hand),
        None => GestureResult::NoHand,
    }
}

pub fn classify_hand(hand: &HandLandmarks) -> GestureResult {
    let folded = Finger::ALL.map(|finger| is_folded(hand, finger));
    let folded_count = folded.iter().filter(|f| **f).count();

    // Thumb state is diagnostic only; no gesture depends on it
    let thumb_folded = is_thumb_folded(hand);
    trace!(folded_count, thumb_folded, "classifying hand");

    match folded_count {
        4 => GestureResult::Move(Move::Gun),
        0 => GestureResult::Move(Move::Water),
        2 => match folded {
            [false, false, true, true] => GestureResult::Move(Move::Snake),
            _ => GestureResult::Ambiguous,
        },
        _ => GestureResult::Ambiguous,
    }
}
