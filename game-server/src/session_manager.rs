use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use game_core::{GameEngine, GameRng};
use game_types::{ConfigureResponse, Difficulty, GameError, MatchStats, RoundResult, SessionId};

/// Spreads per-session seeds derived from a shared base seed
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
pub struct ActiveSession {
    engine: GameEngine,
    last_activity: Instant,
}

impl ActiveSession {
    fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            last_activity: Instant::now(),
        }
    }

    fn update_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    fn is_expired(&self, timeout: Duration) -> bool {
        self.last_activity.elapsed() > timeout
    }
}

/// Maps session ids to their own engine. Each engine sits behind its own
/// lock, so rounds within a session are serialised while sessions run in parallel.
pub struct SessionManager {
    sessions: DashMap<SessionId, Arc<Mutex<ActiveSession>>>,
    base_seed: Option<u64>,
    sessions_created: AtomicU64,
}

impl SessionManager {
    pub fn new(base_seed: Option<u64>) -> Self {
        Self {
            sessions: DashMap::new(),
            base_seed,
            sessions_created: AtomicU64::new(0),
        }
    }

    fn next_rng(&self) -> GameRng {
        let n = self.sessions_created.fetch_add(1, Ordering::Relaxed) + 1;
        match self.base_seed {
            Some(seed) => GameRng::new(seed.wrapping_add(n.wrapping_mul(SEED_STRIDE))),
            None => GameRng::from_entropy(),
        }
    }

    fn new_session(&self) -> Arc<Mutex<ActiveSession>> {
        Arc::new(Mutex::new(ActiveSession::new(GameEngine::new(self.next_rng()))))
    }

    /// Return the requested session id if it is live, otherwise open a new session
    pub fn ensure_session(&self, requested: Option<SessionId>) -> SessionId {
        if let Some(id) = requested {
            if self.sessions.contains_key(&id) {
                return id;
            }
            debug!("Session {} unknown or expired, starting a new one", id);
        }

        let id = Uuid::new_v4();
        self.sessions.insert(id, self.new_session());
        info!("Created session {}", id);
        id
    }

    // The sweep may drop a session between `ensure_session` and this lookup;
    // the id then restarts as a default Easy/rusty match instead of failing.
    fn session(&self, session_id: &SessionId) -> Arc<Mutex<ActiveSession>> {
        let entry = self
            .sessions
            .entry(*session_id)
            .or_insert_with(|| self.new_session());
        Arc::clone(&*entry)
    }

    pub async fn configure(
        &self,
        session_id: &SessionId,
        difficulty: Difficulty,
        personality: &str,
    ) -> Result<ConfigureResponse, GameError> {
        let session = self.session(session_id);
        let mut session = session.lock().await;
        session.update_activity();
        session.engine.configure(difficulty, personality)
    }

    pub async fn play(
        &self,
        session_id: &SessionId,
        raw_move: &str,
    ) -> Result<RoundResult, GameError> {
        let session = self.session(session_id);
        let mut session = session.lock().await;
        session.update_activity();
        session.engine.play(raw_move)
    }

    pub async fn stats(&self, session_id: &SessionId) -> MatchStats {
        let session = self.session(session_id);
        let mut session = session.lock().await;
        session.update_activity();
        session.engine.stats()
    }

    pub async fn reset(&self, session_id: &SessionId) {
        let session = self.session(session_id);
        let mut session = session.lock().await;
        session.update_activity();
        session.engine.reset_stats();
    }

    pub fn remove_session(&self, session_id: &SessionId) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn has_session(&self, session_id: &SessionId) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Drop sessions idle longer than `timeout`. Sessions mid-request are kept.
    pub fn cleanup_idle_sessions(&self, timeout: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => !session.is_expired(timeout),
            Err(_) => true,
        });
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!("Removed {} idle sessions", removed);
        }
        removed
    }

    pub fn active_sessions_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(None)
    }
}
