use std::time::Instant;

use crate::cards::Card;
use crate::rules::Scoring;

/// Time-decayed match bonus for a card, in `[0, scoring.bonus_max]`.
///
/// Full bonus for a card that never sat face up, linearly decaying to 0 as
/// its accumulated face-up time approaches the bonus time limit. Cards
/// without a bonus window (zero limit) earn nothing.
pub fn bonus<C>(card: &Card<C>, scoring: &Scoring, now: Instant) -> i32 {
    let limit = card.bonus_time_limit;
    if limit.is_zero() || scoring.bonus_max <= 0 {
        return 0;
    }
    let used = card.face_up_time(now);
    if used >= limit {
        return 0;
    }
    let remaining = 1.0 - used.as_secs_f64() / limit.as_secs_f64();
    (f64::from(scoring.bonus_max) * remaining).floor() as i32
}
