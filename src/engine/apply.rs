use std::time::Instant;

use crate::cards::CardId;
use crate::engine::score::bonus;
use crate::state::GameState;

/// What a choose call did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown id, or the card was already face up or matched.
    Ignored,
    /// The card flipped up and is now the armed candidate.
    Flipped,
    /// The card completed a pair. `points` includes the time bonuses.
    Matched { points: i32 },
    /// The card did not match the candidate. `penalty` is the total
    /// deduction for already-seen cards (0, 1x or 2x the per-card penalty).
    Mismatched { penalty: i32 },
}

/// Apply one choice to the round at an explicit instant.
///
/// The sole mutating operation on a [`GameState`]. Invalid choices are
/// no-ops; every reachable state keeps at most one card face up and
/// unmatched.
pub fn choose_at<C: PartialEq>(
    state: &mut GameState<C>,
    card_id: CardId,
    now: Instant,
) -> ChooseOutcome {
    let Some(chosen) = state.index_of(card_id) else {
        return ChooseOutcome::Ignored;
    };
    if state.cards[chosen].is_face_up || state.cards[chosen].is_matched {
        return ChooseOutcome::Ignored;
    }

    match state.candidate.take() {
        Some(candidate) if candidate != chosen => {
            let outcome = if state.cards[candidate].content == state.cards[chosen].content {
                // Bonuses are read before the flip so the chosen card's
                // current stint does not count against it.
                let points = state.scoring.match_award
                    + bonus(&state.cards[candidate], &state.scoring, now)
                    + bonus(&state.cards[chosen], &state.scoring, now);
                state.cards[candidate].is_matched = true;
                state.cards[chosen].is_matched = true;
                state.score += points;
                ChooseOutcome::Matched { points }
            } else {
                let mut penalty = 0;
                if state.cards[candidate].has_been_seen {
                    penalty += state.scoring.mismatch_penalty;
                }
                if state.cards[chosen].has_been_seen {
                    penalty += state.scoring.mismatch_penalty;
                }
                state.score -= penalty;
                state.cards[candidate].turn_face_down(now);
                ChooseOutcome::Mismatched { penalty }
            };
            state.cards[candidate].has_been_seen = true;
            state.cards[chosen].has_been_seen = true;
            state.cards[chosen].turn_face_up(now);
            outcome
        }
        _ => {
            // No candidate armed: reset any leftover face-up card, then arm
            // the chosen one and start its bonus clock.
            state.turn_all_face_down(now);
            state.cards[chosen].turn_face_up(now);
            state.candidate = Some(chosen);
            ChooseOutcome::Flipped
        }
    }
}

/// [`choose_at`] stamped with the current wall clock.
#[inline]
pub fn choose<C: PartialEq>(state: &mut GameState<C>, card_id: CardId) -> ChooseOutcome {
    choose_at(state, card_id, Instant::now())
}
