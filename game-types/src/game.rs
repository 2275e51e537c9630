use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Move {
    Snake, // beats Water
    Water, // beats Gun
    Gun,   // beats Snake
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Snake, Move::Water, Move::Gun];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Snake => "snake",
            Move::Water => "water",
            Move::Gun => "gun",
        }
    }

    /// Whether this move defeats `other` under the cyclic dominance rule
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Snake, Move::Water) | (Move::Water, Move::Gun) | (Move::Gun, Move::Snake)
        )
    }

    /// The move that defeats this one
    pub fn counter(self) -> Move {
        match self {
            Move::Snake => Move::Gun,
            Move::Water => Move::Snake,
            Move::Gun => Move::Water,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake" => Ok(Move::Snake),
            "water" => Ok(Move::Water),
            "gun" => Ok(Move::Gun),
            _ => Err(GameError::InvalidMove {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    UserWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    pub fn resolve(user_move: Move, computer_move: Move) -> Self {
        if user_move == computer_move {
            Outcome::Tie
        } else if user_move.beats(computer_move) {
            Outcome::UserWin
        } else {
            Outcome::ComputerWin
        }
    }

    /// Headline shown above the round result
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::UserWin => "You won! 🥳",
            Outcome::ComputerWin => "Computer won! 🤖",
            Outcome::Tie => "It's a tie! 🤝",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a difficulty name, falling back to `Easy` for anything unrecognised
    pub fn from_name_or_default(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSnapshot {
    pub user: u32,
    pub computer: u32,
    pub tie: u32,
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub user_move: Move,
    pub computer_move: Move,
    pub message: String,
    pub scores: ScoreSnapshot,
    pub coach_advice: String,
    pub commentary: String,
    pub mood: Option<String>, // Set when either streak reaches two
    pub personality_name: String,
}

/// Bar widths (0..=10) of each side's share of played rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConfidenceMeter {
    pub user: u32,
    pub computer: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchStats {
    pub user_score: u32,
    pub computer_score: u32,
    pub tie_score: u32,
    pub rounds: u32,
    pub user_streak: u32,
    pub computer_streak: u32,
    pub confidence: ConfidenceMeter,
}

/// A single normalized hand landmark as produced by the upstream detector.
/// `x` and `y` are image-relative in [0, 1] with `y` growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_is_exhaustive() {
        for a in Move::ALL {
            for b in Move::ALL {
                let relations = [a.beats(b), b.beats(a), a == b];
                assert_eq!(
                    relations.iter().filter(|held| **held).count(),
                    1,
                    "{a} vs {b} must satisfy exactly one relation"
                );
            }
        }
    }

    #[test]
    fn test_dominance_cycle() {
        assert!(Move::Snake.beats(Move::Water));
        assert!(Move::Water.beats(Move::Gun));
        assert!(Move::Gun.beats(Move::Snake));
        for m in Move::ALL {
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn test_counter_beats_move() {
        assert_eq!(Move::Snake.counter(), Move::Gun);
        assert_eq!(Move::Water.counter(), Move::Snake);
        assert_eq!(Move::Gun.counter(), Move::Water);
        for m in Move::ALL {
            assert!(m.counter().beats(m));
        }
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!("snake".parse::<Move>(), Ok(Move::Snake));
        assert_eq!("water".parse::<Move>(), Ok(Move::Water));
        assert_eq!("gun".parse::<Move>(), Ok(Move::Gun));

        let err = "rock".parse::<Move>().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                value: "rock".to_string()
            }
        );
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_move_parsing_is_exact() {
        for raw in [" WATER ", "Gun", "SNAKE", " gun", "water\n"] {
            assert_eq!(
                raw.parse::<Move>(),
                Err(GameError::InvalidMove {
                    value: raw.to_string()
                }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_outcome_resolution() {
        assert_eq!(Outcome::resolve(Move::Snake, Move::Snake), Outcome::Tie);
        assert_eq!(Outcome::resolve(Move::Snake, Move::Water), Outcome::UserWin);
        assert_eq!(Outcome::resolve(Move::Snake, Move::Gun), Outcome::ComputerWin);
        assert_eq!(Outcome::resolve(Move::Gun, Move::Snake), Outcome::UserWin);
        assert_eq!(Outcome::resolve(Move::Water, Move::Snake), Outcome::ComputerWin);
    }

    #[test]
    fn test_difficulty_defaults_to_easy() {
        assert_eq!(Difficulty::from_name_or_default("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name_or_default("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name_or_default("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Move::Gun).unwrap(), "\"gun\"");
        assert_eq!(
            serde_json::to_string(&Outcome::ComputerWin).unwrap(),
            "\"computer_win\""
        );

        let landmark: Landmark = serde_json::from_str(r#"{"x":0.5,"y":0.25}"#).unwrap();
        assert_eq!(landmark, Landmark::new(0.5, 0.25, 0.0));
    }
}
