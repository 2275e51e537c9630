use game_types::{GameError, Move, Outcome};
use std::fmt;
use std::str::FromStr;

/// Placeholder in advice lines replaced by the player's repeated move
pub const MOVE_PLACEHOLDER: &str = "{move}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PersonalityId {
    #[default]
    Rusty,
    Zappy,
    Luna,
}

/// Flavor-text profile for the computer opponent. Strategy is independent of
/// the personality; only commentary and coaching text vary.
#[derive(Debug)]
pub struct Personality {
    pub id: &'static str,
    pub display_name: &'static str,
    pub catchphrase: &'static str,
    pub win_lines: &'static [&'static str],
    pub loss_lines: &'static [&'static str],
    pub tie_lines: &'static [&'static str],
    pub advice_lines: &'static [&'static str],
}

static RUSTY: Personality = Personality {
    id: "rusty",
    display_name: "Rusty",
    catchphrase: "Let's see if you can handle the pro!",
    win_lines: &[
        "Calculated. 📈",
        "Too easy! Try harder next time.",
        "My algorithms are superior.",
        "Victory is logical.",
    ],
    loss_lines: &[
        "An anomaly in my data...",
        "Wait, that wasn't supposed to happen.",
        "Nice move... for a human.",
        "I need a reboot after that one.",
    ],
    tie_lines: &[
        "A statistical stalemate.",
        "We are perfectly matched.",
        "Interesting choice.",
        "Back to square one.",
    ],
    advice_lines: &[
        "You're leaning on {move} too much. Predictable.",
        "My sensors detect a pattern. Shake it up!",
        "High probability you'll lose if you keep this up.",
    ],
};

static ZAPPY: Personality = Personality {
    id: "zappy",
    display_name: "Zappy",
    catchphrase: "Ready to get zapped by my awesome moves?",
    win_lines: &[
        "BOOM! Roasted! 🔥",
        "ZAP! Gotcha!",
        "I'm on fire today!",
        "Can't touch this! ⚡",
    ],
    loss_lines: &[
        "Ouch! That hurt!",
        "Hey! No fair!",
        "You got lucky that time!",
        "I'm still the coolest though! 😎",
    ],
    tie_lines: &[
        "Copycat! 🐈",
        "Stop reading my mind!",
        "Let's go again, double time!",
        "Twin powers, activate!",
    ],
    advice_lines: &[
        "Boring! Try something new!",
        "You're acting like a robot! Oh wait, that's me!",
        "Mix it up or I'll zap you!",
    ],
};

static LUNA: Personality = Personality {
    id: "luna",
    display_name: "Luna",
    catchphrase: "May the flow of the game guide us.",
    win_lines: &[
        "The tides have turned in my favor.",
        "Balance is restored.",
        "A graceful victory.",
        "Walk in peace, but I won.",
    ],
    loss_lines: &[
        "A lesson in humility for me.",
        "You have found your center.",
        "The universe smiles upon you.",
        "Well played, traveler.",
    ],
    tie_lines: &[
        "We are one with the game.",
        "Harmonious result.",
        "Peaceful coexistence.",
        "Energy in equilibrium.",
    ],
    advice_lines: &[
        "Seek the path less traveled.",
        "Your spirit is repetitive.",
        "Let go of your attachment to {move}.",
    ],
};

impl PersonalityId {
    pub const ALL: [PersonalityId; 3] =
        [PersonalityId::Rusty, PersonalityId::Zappy, PersonalityId::Luna];

    pub fn profile(&self) -> &'static Personality {
        match self {
            PersonalityId::Rusty => &RUSTY,
            PersonalityId::Zappy => &ZAPPY,
            PersonalityId::Luna => &LUNA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.profile().id
    }
}

impl fmt::Display for PersonalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonalityId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GameError::InvalidConfig {
                personality: s.to_string(),
            })
    }
}

impl Personality {
    /// Commentary is spoken by the opponent, so a user win draws from the loss lines
    pub fn commentary_lines(&self, outcome: Outcome) -> &'static [&'static str] {
        match outcome {
            Outcome::ComputerWin => self.win_lines,
            Outcome::UserWin => self.loss_lines,
            Outcome::Tie => self.tie_lines,
        }
    }
}

/// Substitute the repeated move into an advice template
pub fn fill_advice(template: &str, user_move: Move) -> String {
    template.replace(MOVE_PLACEHOLDER, user_move.as_str())
}
