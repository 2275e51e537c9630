#![allow(dead_code)]

use game_core::{Finger, GameEngine, HandJoint, HandLandmarks, LANDMARK_COUNT, StrategyTuning};
use game_types::{Difficulty, Landmark, Move};

/// Creates a seeded engine with the given difficulty and personality
pub fn create_engine(seed: u64, difficulty: Difficulty, personality: &str) -> GameEngine {
    let mut engine = GameEngine::with_seed(seed);
    engine
        .configure(difficulty, personality)
        .expect("built-in personality");
    engine
}

/// Creates a Hard engine that never explores, so every move is a prediction
pub fn create_predicting_engine(seed: u64) -> GameEngine {
    let mut engine = GameEngine::with_seed(seed).with_tuning(StrategyTuning {
        medium_random_rate: 0.0,
        hard_exploration_rate: 0.0,
    });
    engine.configure(Difficulty::Hard, "rusty").expect("built-in personality");
    engine
}

/// Plays the same move `count` times
pub fn play_repeated(engine: &mut GameEngine, user_move: Move, count: usize) {
    for _ in 0..count {
        engine.play_round(user_move);
    }
}

/// A cycling move sequence of arbitrary length
pub fn move_sequence(len: usize, stride: usize) -> Vec<Move> {
    (0..len).map(|i| Move::ALL[(i * stride + i / 7) % 3]).collect()
}

/// Builds a hand from per-finger fold states in index, middle, ring, pinky order.
/// Only y-values differ; every other coordinate sits at the frame centre.
pub fn hand_with_folds(folded: [bool; 4]) -> HandLandmarks {
    let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[HandJoint::Wrist as usize].y = 0.9;

    for (finger, is_folded) in Finger::ALL.into_iter().zip(folded) {
        points[finger.pip() as usize].y = 0.45;
        points[finger.tip() as usize].y = if is_folded { 0.55 } else { 0.2 };
    }

    HandLandmarks::try_from(points).expect("21 landmarks")
}

pub fn fist() -> HandLandmarks {
    hand_with_folds([true; 4])
}

pub fn open_palm() -> HandLandmarks {
    hand_with_folds([false; 4])
}

pub fn v_sign() -> HandLandmarks {
    hand_with_folds([false, false, true, true])
}
