use game_types::{Difficulty, Move};

use crate::GameRng;

/// Probabilities that steer the opponent between random play and prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyTuning {
    /// Chance that a Medium opponent plays randomly instead of predicting
    pub medium_random_rate: f64,
    /// Chance that a Hard opponent explores with a random move
    pub hard_exploration_rate: f64,
}

impl Default for StrategyTuning {
    fn default() -> Self {
        Self {
            medium_random_rate: 0.6,
            hard_exploration_rate: 0.3,
        }
    }
}

/// Pick the computer's move from prior-round history only.
///
/// Medium skips Hard's exploration roll once it decides to predict.
pub fn choose_move(
    difficulty: Difficulty,
    history: &[Move],
    tuning: &StrategyTuning,
    rng: &mut GameRng,
) -> Move {
    let random_rate = match difficulty {
        Difficulty::Easy => return random_move(rng),
        Difficulty::Medium => tuning.medium_random_rate,
        Difficulty::Hard => tuning.hard_exploration_rate,
    };

    if rng.gen_bool(random_rate) {
        return random_move(rng);
    }

    match predict_user_move(history) {
        Some(predicted) => predicted.counter(),
        None => random_move(rng),
    }
}

pub fn random_move(rng: &mut GameRng) -> Move {
    Move::ALL[rng.gen_index(Move::ALL.len())]
}

/// Most frequent move in the history. Ties go to the move seen first.
pub fn predict_user_move(history: &[Move]) -> Option<Move> {
    let mut counts: Vec<(Move, usize)> = Vec::with_capacity(Move::ALL.len());

    for &m in history {
        match counts.iter_mut().find(|(seen, _)| *seen == m) {
            Some((_, count)) => *count += 1,
            None => counts.push((m, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(Move, usize)>, (m, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((m, count)),
        })
        .map(|(m, _)| m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_exploration() -> StrategyTuning {
        StrategyTuning {
            medium_random_rate: 0.0,
            hard_exploration_rate: 0.0,
        }
    }

    #[test]
    fn test_predict_empty_history() {
        assert_eq!(predict_user_move(&[]), None);
    }

    #[test]
    fn test_predict_mode() {
        let history = [Move::Water, Move::Gun, Move::Gun, Move::Snake];
        assert_eq!(predict_user_move(&history), Some(Move::Gun));
    }

    #[test]
    fn test_predict_tie_goes_to_first_seen() {
        let history = [Move::Water, Move::Gun, Move::Gun, Move::Water];
        assert_eq!(predict_user_move(&history), Some(Move::Water));

        let history = [Move::Snake, Move::Gun, Move::Water];
        assert_eq!(predict_user_move(&history), Some(Move::Snake));
    }

    #[test]
    fn test_hard_counters_prediction_without_exploration() {
        let mut rng = GameRng::new(3);
        let tuning = no_exploration();

        for (repeated, expected) in [
            (Move::Snake, Move::Gun),
            (Move::Water, Move::Snake),
            (Move::Gun, Move::Water),
        ] {
            let history = vec![repeated; 5];
            for _ in 0..20 {
                assert_eq!(choose_move(Difficulty::Hard, &history, &tuning, &mut rng), expected);
            }
        }
    }

    #[test]
    fn test_medium_predicts_when_not_random() {
        let mut rng = GameRng::new(11);
        let history = vec![Move::Water; 3];
        let m = choose_move(Difficulty::Medium, &history, &no_exploration(), &mut rng);
        assert_eq!(m, Move::Snake);
    }

    #[test]
    fn test_easy_ignores_history() {
        let mut rng = GameRng::new(5);
        let history = vec![Move::Snake; 50];
        let picks: Vec<Move> = (0..300)
            .map(|_| choose_move(Difficulty::Easy, &history, &no_exploration(), &mut rng))
            .collect();
        for m in Move::ALL {
            assert!(picks.contains(&m), "easy opponent never played {m}");
        }
    }

    #[test]
    fn test_empty_history_falls_back_to_random() {
        let mut rng = GameRng::new(9);
        let picks: Vec<Move> = (0..300)
            .map(|_| choose_move(Difficulty::Hard, &[], &no_exploration(), &mut rng))
            .collect();
        for m in Move::ALL {
            assert!(picks.contains(&m));
        }
    }
}
