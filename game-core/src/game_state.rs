use game_types::{
    ConfidenceMeter, ConfigureResponse, Difficulty, GameError, MatchStats, Move, Outcome,
    RoundResult, ScoreSnapshot,
};
use tracing::{debug, info};

use crate::personality::fill_advice;
use crate::{GameRng, PersonalityId, StrategyTuning, choose_move};

pub const GENERIC_ADVICE: &str = "Keep going! You're doing great.";

/// Consecutive identical moves (beyond the first) before the coach calls it out
const REPETITION_THRESHOLD: u32 = 2;
/// Computer win streak that prompts a move suggestion
const LOSING_STREAK_THRESHOLD: u32 = 3;
const MOOD_STREAK: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub user_score: u32,
    pub computer_score: u32,
    pub tie_count: u32,
    pub round_number: u32,
    pub move_history: Vec<Move>,
    pub user_streak: u32,
    pub computer_streak: u32,
    pub repetitive_move_count: u32,
    pub last_user_move: Option<Move>,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            user_score: 0,
            computer_score: 0,
            tie_count: 0,
            round_number: 1,
            move_history: Vec::new(),
            user_streak: 0,
            computer_streak: 0,
            repetitive_move_count: 0,
            last_user_move: None,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.user_score + self.computer_score + self.tie_count
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Tie => {
                self.tie_count += 1;
                self.user_streak = 0;
                self.computer_streak = 0;
            }
            Outcome::UserWin => {
                self.user_score += 1;
                self.user_streak += 1;
                self.computer_streak = 0;
            }
            Outcome::ComputerWin => {
                self.computer_score += 1;
                self.computer_streak += 1;
                self.user_streak = 0;
            }
        }
        self.round_number += 1;
    }

    pub fn scores(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            user: self.user_score,
            computer: self.computer_score,
            tie: self.tie_count,
            rounds: self.round_number,
        }
    }

    pub fn confidence(&self) -> ConfidenceMeter {
        let total = self.rounds_played();
        if total == 0 {
            return ConfidenceMeter::default();
        }
        ConfidenceMeter {
            user: self.user_score * 10 / total,
            computer: self.computer_score * 10 / total,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// One player's match against the computer. Not shareable across threads
/// without external locking; each session owns its own engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: MatchState,
    difficulty: Difficulty,
    personality: PersonalityId,
    tuning: StrategyTuning,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine on Easy with the default personality
    pub fn new(rng: GameRng) -> Self {
        Self {
            state: MatchState::new(),
            difficulty: Difficulty::default(),
            personality: PersonalityId::default(),
            tuning: StrategyTuning::default(),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    pub fn with_tuning(mut self, tuning: StrategyTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn personality(&self) -> PersonalityId {
        self.personality
    }

    /// Set difficulty and personality, then start a fresh match.
    /// An unknown personality leaves the engine untouched.
    pub fn configure(
        &mut self,
        difficulty: Difficulty,
        personality_id: &str,
    ) -> Result<ConfigureResponse, GameError> {
        let personality: PersonalityId = personality_id.parse()?;

        self.difficulty = difficulty;
        self.personality = personality;
        self.reset_stats();

        info!("Configured match: difficulty={}, personality={}", difficulty, personality);

        let profile = personality.profile();
        Ok(ConfigureResponse {
            difficulty,
            personality: profile.id.to_string(),
            personality_name: profile.display_name.to_string(),
            catchphrase: profile.catchphrase.to_string(),
        })
    }

    pub fn reset_stats(&mut self) {
        self.state = MatchState::new();
    }

    /// Choose the computer's move for the coming round from prior history only
    pub fn select_opponent_move(&mut self) -> Move {
        choose_move(
            self.difficulty,
            &self.state.move_history,
            &self.tuning,
            &mut self.rng,
        )
    }

    /// Parse a raw move name and play it. Rejected input changes nothing.
    pub fn play(&mut self, raw_move: &str) -> Result<RoundResult, GameError> {
        let user_move: Move = raw_move.parse()?;
        Ok(self.play_round(user_move))
    }

    pub fn play_round(&mut self, user_move: Move) -> RoundResult {
        let computer_move = self.select_opponent_move();
        self.state.move_history.push(user_move);

        let outcome = Outcome::resolve(user_move, computer_move);
        self.state.record(outcome);

        debug!(
            "Round {}: user={} computer={} outcome={:?}",
            self.state.round_number - 1,
            user_move,
            computer_move,
            outcome
        );

        let coach_advice = self.coach_advice(user_move);
        let commentary = self.commentary(outcome);

        RoundResult {
            outcome,
            user_move,
            computer_move,
            message: outcome.message().to_string(),
            scores: self.state.scores(),
            coach_advice,
            commentary,
            mood: self.mood().map(str::to_string),
            personality_name: self.personality.profile().display_name.to_string(),
        }
    }

    pub fn stats(&self) -> MatchStats {
        MatchStats {
            user_score: self.state.user_score,
            computer_score: self.state.computer_score,
            tie_score: self.state.tie_count,
            rounds: self.state.round_number,
            user_streak: self.state.user_streak,
            computer_streak: self.state.computer_streak,
            confidence: self.state.confidence(),
        }
    }

    // Tracks repetition as a side effect, so it runs exactly once per round
    fn coach_advice(&mut self, user_move: Move) -> String {
        if self.state.last_user_move == Some(user_move) {
            self.state.repetitive_move_count += 1;
        } else {
            self.state.repetitive_move_count = 0;
        }
        self.state.last_user_move = Some(user_move);

        if self.state.repetitive_move_count >= REPETITION_THRESHOLD {
            let lines = self.personality.profile().advice_lines;
            if let Some(template) = self.rng.choose(lines) {
                return fill_advice(template, user_move);
            }
        }

        if self.state.computer_streak >= LOSING_STREAK_THRESHOLD {
            let alternatives: Vec<Move> = Move::ALL
                .into_iter()
                .filter(|m| *m != user_move)
                .collect();
            let suggestion = alternatives[self.rng.gen_index(alternatives.len())];
            return format!("I'm winning too much! Maybe try {}?", suggestion);
        }

        GENERIC_ADVICE.to_string()
    }

    fn commentary(&mut self, outcome: Outcome) -> String {
        let lines = self.personality.profile().commentary_lines(outcome);
        self.rng
            .choose(lines)
            .map(|line| line.to_string())
            .unwrap_or_default()
    }

    fn mood(&self) -> Option<&'static str> {
        if self.state.user_streak == MOOD_STREAK {
            Some("You're improving 😏")
        } else if self.state.computer_streak == MOOD_STREAK {
            Some("I'm on fire 🔥")
        } else {
            None
        }
    }
}
