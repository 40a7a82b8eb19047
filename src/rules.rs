use std::time::Duration;

/// Scoring knobs for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    /// Base award for completing a pair.
    pub match_award: i32,
    /// Deduction per already-seen card involved in a mismatch.
    pub mismatch_penalty: i32,
    /// Bonus for an instant match; decays to 0 over `bonus_time_limit`.
    pub bonus_max: i32,
    /// Face-up time after which a card earns no bonus.
    pub bonus_time_limit: Duration,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_award: 2,
            mismatch_penalty: 1,
            bonus_max: 10,
            bonus_time_limit: Duration::from_secs(6),
        }
    }
}

impl Scoring {
    #[inline]
    pub const fn new(
        match_award: i32,
        mismatch_penalty: i32,
        bonus_max: i32,
        bonus_time_limit: Duration,
    ) -> Self {
        Self {
            match_award,
            mismatch_penalty,
            bonus_max,
            bonus_time_limit,
        }
    }

    /// Flat scoring: no time bonus at all.
    #[inline]
    pub const fn without_bonus() -> Self {
        Self {
            match_award: 2,
            mismatch_penalty: 1,
            bonus_max: 0,
            bonus_time_limit: Duration::ZERO,
        }
    }
}
