use std::time::Instant;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use rand::seq::SliceRandom;

use crate::cards::{Card, CardId};
use crate::engine::apply::{choose_at, ChooseOutcome};
use crate::rng::rng_for_round;
use crate::rules::Scoring;
use crate::state::GameState;
use crate::theme::{Theme, ThemeId};

/// One ongoing game against a theme: deals rounds, forwards choices to the
/// model and tracks end-of-round.
#[derive(Debug, Clone)]
pub struct GameSession {
    theme: Theme,
    state: GameState<String>,
    scoring: Scoring,
    seed: u64,
    round: u64,
    ended: bool,
}

impl GameSession {
    pub fn new(theme: Theme, seed: u64) -> Result<Self, String> {
        Self::with_scoring(theme, seed, Scoring::default())
    }

    pub fn with_scoring(theme: Theme, seed: u64, scoring: Scoring) -> Result<Self, String> {
        let state = Self::deal(&theme, scoring, seed, 0)?;
        Ok(Self {
            theme,
            state,
            scoring,
            seed,
            round: 0,
            ended: false,
        })
    }

    /// Shuffle the theme's content pool and deal a fresh round from it.
    fn deal(
        theme: &Theme,
        scoring: Scoring,
        seed: u64,
        round: u64,
    ) -> Result<GameState<String>, String> {
        if !theme.is_playable() {
            return Err(format!(
                "theme '{}' has fewer than two contents and cannot be dealt",
                theme.name
            ));
        }
        let mut rng = rng_for_round(seed, theme.id(), round);
        let mut pool = theme.contents.clone();
        pool.shuffle(&mut rng);
        let pairs = theme.number_of_pairs.min(pool.len()).max(2);
        GameState::new_shuffled(pairs, scoring, |i| pool[i].clone(), &mut rng)
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn cards(&self) -> &[Card<String>] {
        self.state.cards()
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.state.score()
    }

    #[inline]
    pub fn found_pairs_count(&self) -> usize {
        self.state.found_pairs_count()
    }

    #[inline]
    pub fn number_of_pairs(&self) -> usize {
        self.state.number_of_pairs()
    }

    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// True once every pair of the current round has been found.
    #[inline]
    pub fn is_end_of_round(&self) -> bool {
        self.ended
    }

    pub fn choose(&mut self, card_id: CardId) -> ChooseOutcome {
        self.choose_at(card_id, Instant::now())
    }

    pub fn choose_at(&mut self, card_id: CardId, now: Instant) -> ChooseOutcome {
        let outcome = choose_at(&mut self.state, card_id, now);
        self.ended = self.state.is_complete();
        outcome
    }

    /// Throw the round away and deal a fresh one from the same theme.
    pub fn restart(&mut self) -> Result<(), String> {
        self.round += 1;
        self.state = Self::deal(&self.theme, self.scoring, self.seed, self.round)?;
        self.ended = false;
        Ok(())
    }
}

/// Lazily created sessions, one per theme handle.
#[derive(Debug, Default)]
pub struct SessionCache {
    seed: u64,
    sessions: HashMap<ThemeId, GameSession>,
}

impl SessionCache {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            sessions: HashMap::new(),
        }
    }

    /// The session for a theme, dealing a first round on first access.
    pub fn session(&mut self, theme: &Theme) -> Result<&mut GameSession, String> {
        match self.sessions.entry(theme.id()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(v) => {
                let session = GameSession::new(theme.clone(), self.seed)?;
                Ok(v.insert(session))
            }
        }
    }

    #[inline]
    pub fn remove(&mut self, id: ThemeId) -> Option<GameSession> {
        self.sessions.remove(&id)
    }

    /// Drop sessions whose theme no longer passes the keep check.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(ThemeId) -> bool,
    {
        self.sessions.retain(|id, _| keep(*id));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
