use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{Card, CardId};
use crate::rules::Scoring;

/// State of one matching round: the dealt cards in display order, the
/// running score, and the armed candidate awaiting a second choice.
///
/// Mutated only through [`crate::engine::apply::choose_at`]; everything
/// else is read access.
#[derive(Debug, Clone)]
pub struct GameState<C> {
    pub(crate) cards: Vec<Card<C>>,
    pub(crate) score: i32,
    pub(crate) candidate: Option<usize>,
    pub(crate) scoring: Scoring,
}

impl<C> GameState<C> {
    /// Build `2 * number_of_pairs` face-down cards in deal order: pair `i`
    /// yields two cards sharing `content_at(i)` with ids `2i` and `2i + 1`.
    pub fn new<F>(number_of_pairs: usize, scoring: Scoring, mut content_at: F) -> Result<Self, String>
    where
        C: Clone,
        F: FnMut(usize) -> C,
    {
        if number_of_pairs == 0 {
            return Err("a round needs at least one pair of cards".to_string());
        }
        let max_pairs = usize::from(CardId::MAX / 2);
        if number_of_pairs > max_pairs {
            return Err(format!(
                "pair count {number_of_pairs} exceeds supported maximum {max_pairs}"
            ));
        }

        let mut cards = Vec::with_capacity(number_of_pairs * 2);
        for pair in 0..number_of_pairs {
            let content = content_at(pair);
            let base = (pair * 2) as CardId;
            cards.push(Card::new(base, content.clone(), scoring.bonus_time_limit));
            cards.push(Card::new(base + 1, content, scoring.bonus_time_limit));
        }

        Ok(Self {
            cards,
            score: 0,
            candidate: None,
            scoring,
        })
    }

    /// Like [`GameState::new`], but with the deal order shuffled.
    pub fn new_shuffled<F, R>(
        number_of_pairs: usize,
        scoring: Scoring,
        content_at: F,
        rng: &mut R,
    ) -> Result<Self, String>
    where
        C: Clone,
        F: FnMut(usize) -> C,
        R: Rng,
    {
        let mut state = Self::new(number_of_pairs, scoring, content_at)?;
        state.cards.shuffle(rng);
        Ok(state)
    }

    /// Read-only snapshot of the cards in display order.
    #[inline]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    #[inline]
    pub fn number_of_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Count of completed pairs.
    #[inline]
    pub fn found_pairs_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Id of the armed candidate card, if one is waiting for a second choice.
    #[inline]
    pub fn candidate_id(&self) -> Option<CardId> {
        self.candidate.map(|i| self.cards[i].id)
    }

    /// True once every pair has been found.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.found_pairs_count() == self.number_of_pairs()
    }

    #[inline]
    pub(crate) fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub(crate) fn turn_all_face_down(&mut self, now: Instant) {
        for card in &mut self.cards {
            if card.is_face_up && !card.is_matched {
                card.turn_face_down(now);
            }
        }
    }
}
