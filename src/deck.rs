use crate::cards::{Card, Rank, Suit, DECK_SIZE};
use crate::hand::{Hand, HandError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck. Cards are drawn from the end.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in code order.
    ///
    /// ```
    /// use five_card_trick::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards: Vec<Card> = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        debug_assert_eq!(cards.len(), usize::from(DECK_SIZE));
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Draw five cards as a [`Hand`].
    ///
    /// Fails without drawing anything when fewer than five cards remain.
    pub fn deal_hand(&mut self) -> Result<Hand, HandError> {
        if self.len() < Hand::SIZE {
            return Err(HandError::HandCount { expected: Hand::SIZE, got: self.len() });
        }
        Hand::from_slice(&self.draw_n(Hand::SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_is_in_code_order() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        for (i, card) in d.as_slice().iter().enumerate() {
            assert_eq!(usize::from(card.code()), i);
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let cards = d.draw_n(5);
        assert_eq!(cards.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn shuffle_with_caller_rng_matches_seeded_shuffle() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(11);
        d2.shuffle_with(&mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(d1.cards, d2.cards);
        assert_ne!(d1.cards, Deck::standard().cards);
    }

    #[test]
    fn deals_ten_hands_then_stops() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        for _ in 0..10 {
            d.deal_hand().unwrap();
        }
        assert_eq!(d.len(), 2);
        assert_eq!(d.deal_hand(), Err(HandError::HandCount { expected: 5, got: 2 }));
        assert_eq!(d.len(), 2);
    }
}
