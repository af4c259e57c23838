use crate::consts;
use enum_map::Enum;
use std::fmt;

/// The variant of the game being played.  Chosen in the menu and fixed for
/// the length of a run.
#[derive(Clone, Copy, Debug, Default, Enum, Eq, Hash, PartialEq)]
pub(crate) enum GameMode {
    #[default]
    Classic,
    TimeAttack,
    Challenge,
    Infinite,
}

impl GameMode {
    pub(crate) fn rules(self) -> &'static ModeRules {
        match self {
            GameMode::Classic => &CLASSIC,
            GameMode::TimeAttack => &TIME_ATTACK,
            GameMode::Challenge => &CHALLENGE,
            GameMode::Infinite => &INFINITE,
        }
    }

    /// Label for the mode's menu button
    pub(crate) fn label(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic Mode",
            GameMode::TimeAttack => "Time Attack Mode",
            GameMode::Challenge => "Challenge Mode",
            GameMode::Infinite => "Infinite Play",
        }
    }

    /// Heading shown during the countdown
    pub(crate) fn banner(self) -> &'static str {
        match self {
            GameMode::Classic => "CLASSIC MODE",
            GameMode::TimeAttack => "TIME ATTACK MODE",
            GameMode::Challenge => "CHALLENGE MODE",
            GameMode::Infinite => "INFINITE PLAY",
        }
    }

    /// One-line explanation shown in the menu while the mode is highlighted
    pub(crate) fn description(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic: The traditional snake game experience",
            GameMode::TimeAttack => "Time Attack: Score as much as possible before time runs out",
            GameMode::Challenge => "Challenge: Dodge phantom walls and collect golden fruit!",
            GameMode::Infinite => "Infinite: Snake can't die - play as long as you want!",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// What happens when the snake's head leaves the playable area
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Boundary {
    /// The run ends
    Lethal,
    /// The head reappears at the opposite edge
    Wrap,
}

/// The per-mode parameters of the simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ModeRules {
    pub(crate) boundary: Boundary,

    /// While the snake is shorter than this many segments, running into
    /// itself is harmless.  Zero means self-collision is always lethal.
    pub(crate) self_collision_immunity: usize,

    /// Milliseconds shaved off the step interval each time food is eaten
    pub(crate) food_speedup: u32,

    /// If set, the run ends after this many seconds
    pub(crate) time_limit: Option<f32>,

    /// Whether phantom walls appear and golden fruit can spawn
    pub(crate) hazards: bool,

    /// If `false`, a run that is no longer running moves to the game-over
    /// screen.  If `true`, play carries on regardless.
    pub(crate) endless: bool,
}

impl ModeRules {
    /// Whether a head landing on the snake's own body ends the run for a
    /// snake of length `len`
    pub(crate) fn self_collision_lethal(&self, len: usize) -> bool {
        len >= self.self_collision_immunity
    }
}

static CLASSIC: ModeRules = ModeRules {
    boundary: Boundary::Lethal,
    self_collision_immunity: 0,
    food_speedup: 2,
    time_limit: None,
    hazards: false,
    endless: false,
};

static TIME_ATTACK: ModeRules = ModeRules {
    boundary: Boundary::Lethal,
    self_collision_immunity: 0,
    food_speedup: 5,
    time_limit: Some(consts::TIME_ATTACK_DURATION),
    hazards: false,
    endless: false,
};

static CHALLENGE: ModeRules = ModeRules {
    boundary: Boundary::Lethal,
    self_collision_immunity: 0,
    food_speedup: 5,
    time_limit: None,
    hazards: true,
    endless: false,
};

static INFINITE: ModeRules = ModeRules {
    boundary: Boundary::Wrap,
    self_collision_immunity: 20,
    food_speedup: 2,
    time_limit: None,
    hazards: false,
    endless: true,
};
