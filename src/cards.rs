use std::time::{Duration, Instant};

/// Stable card identifier, assigned in deal order before shuffling.
pub type CardId = u16;

/// One card of a round. `content` is opaque to the engine; two cards form a
/// pair when their contents compare equal.
#[derive(Debug, Clone)]
pub struct Card<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    pub has_been_seen: bool,
    // Bonus timing: face-up time accrues only while the card is face up,
    // accumulated lazily from instants captured at flip time.
    pub(crate) bonus_time_limit: Duration,
    pub(crate) last_face_up: Option<Instant>,
    pub(crate) past_face_up_time: Duration,
}

impl<C> Card<C> {
    #[inline]
    pub(crate) fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            has_been_seen: false,
            bonus_time_limit,
            last_face_up: None,
            past_face_up_time: Duration::ZERO,
        }
    }

    /// Bonus window for this card.
    #[inline]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Total time this card has spent face up, including the current stint.
    pub fn face_up_time(&self, now: Instant) -> Duration {
        match self.last_face_up {
            Some(since) if self.is_face_up => {
                self.past_face_up_time + now.saturating_duration_since(since)
            }
            _ => self.past_face_up_time,
        }
    }

    #[inline]
    pub(crate) fn turn_face_up(&mut self, now: Instant) {
        if !self.is_face_up {
            self.is_face_up = true;
            self.last_face_up = Some(now);
        }
    }

    #[inline]
    pub(crate) fn turn_face_down(&mut self, now: Instant) {
        if self.is_face_up {
            self.past_face_up_time = self.face_up_time(now);
            self.is_face_up = false;
            self.last_face_up = None;
        }
    }
}
