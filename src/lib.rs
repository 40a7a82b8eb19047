#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod cards;
pub mod rules;
pub mod state;
pub mod theme;
pub mod session;
pub mod rng;
pub mod persist;

pub mod engine {
    pub mod apply;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::cards::{Card, CardId};
pub use crate::engine::apply::{choose, choose_at, ChooseOutcome};
pub use crate::engine::score::bonus;
pub use crate::persist::{PrefStore, FORMAT_VERSION};
pub use crate::rng::rng_for_round;
pub use crate::rules::Scoring;
pub use crate::session::{GameSession, SessionCache};
pub use crate::state::GameState;
pub use crate::theme::{RgbaColor, Theme, ThemeId, ThemeStore};
