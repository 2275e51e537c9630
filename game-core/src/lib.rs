pub mod game_state;
pub mod gesture;
pub mod personality;
pub mod rng;
pub mod strategy;

// Re-export main components
pub use game_state::*;
pub use gesture::*;
pub use personality::{Personality, PersonalityId};
pub use rng::*;
pub use strategy::*;
