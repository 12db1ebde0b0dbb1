//! The five-card trick: hide one card of five and signal it with the other four.
//!
//! Five cards from four suits always contain two of the same suit. One of
//! them is hidden; the other (the reference) is shown first and gives away
//! the suit. Going forward around the 13 ranks, one of the pair is at most
//! six steps ahead of the other, so the hidden card is chosen to be that one.
//! The step count is signalled by the order of the remaining three cards.
//!
//! ```
//! use five_card_trick::cards::{Card, Rank, Suit};
//! use five_card_trick::hand::Hand;
//! use five_card_trick::trick::{decode, encode};
//!
//! let hand: Hand = "Ac 5h Jd Qc Ks".parse().unwrap();
//! let encoding = encode(&hand).unwrap();
//! assert_eq!(encoding.hidden, Card::new(Rank::Ace, Suit::Clubs));
//! assert_eq!(decode(&encoding.visible).unwrap(), encoding.hidden);
//! ```

use crate::cards::Card;
use crate::hand::{Hand, HandError, VisibleCards};
use crate::permutation::{arrange, permutation_rank, PermutationError, MAX_RANK};
use log::debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrickError {
    #[error("no two cards share a suit")]
    NoSharedSuit,
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Permutation(#[from] PermutationError),
}

/// Result of encoding a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    /// The card taken out of the hand.
    pub hidden: Card,
    /// The remaining four cards in the order they are shown.
    pub visible: VisibleCards,
    /// Forward distance in `1..=6` from the reference rank to the hidden rank.
    pub offset: u8,
}

impl Encoding {
    pub fn reference(&self) -> Card {
        self.visible.reference()
    }
}

/// First pair `(i, j)`, `i < j`, of cards sharing a suit.
fn same_suit_pair(cards: &[Card; 5]) -> Option<(usize, usize)> {
    (0..cards.len())
        .flat_map(|i| (i + 1..cards.len()).map(move |j| (i, j)))
        .find(|&(i, j)| cards[i].suit() == cards[j].suit())
}

/// Choose the card to hide from `hand` and order the other four.
///
/// The hand is sorted by card code and the first same-suit pair in that order
/// is used, so the result does not depend on the order the hand was given in.
pub fn encode(hand: &Hand) -> Result<Encoding, TrickError> {
    let mut cards = hand.as_array();
    cards.sort_unstable();

    let (i, j) = same_suit_pair(&cards).ok_or(TrickError::NoSharedSuit)?;
    // move the pair to the front; i < j keeps both swaps from disturbing each other
    cards.swap(0, i);
    cards.swap(1, j);
    let [x, y, a, b, c] = cards;

    let diff = x.rank().offset_to(y.rank());
    let (reference, hidden) = if diff <= MAX_RANK { (x, y) } else { (y, x) };
    let offset = reference.rank().offset_to(hidden.rank());
    debug!("pair {x} {y}: reference {reference}, hidden {hidden}, offset {offset}");

    let [a, b, c] = arrange([a, b, c], offset)?;
    let visible = VisibleCards::try_new([reference, a, b, c])?;

    Ok(Encoding { hidden, visible, offset })
}

/// Recover the hidden card from the four cards shown, in order.
///
/// The hidden rank lies `offset` steps forward of the reference rank.
pub fn decode(visible: &VisibleCards) -> Result<Card, TrickError> {
    let reference = visible.reference();
    let [a, b, c] = visible.signal();
    let offset = permutation_rank(&a, &b, &c)?;
    let hidden = Card::new(reference.rank().shifted(offset), reference.suit());
    debug!("decoded {visible}: offset {offset} from {reference} gives {hidden}");
    Ok(hidden)
}

/// Decode four cards given as a slice, checking that there are four distinct ones.
pub fn decode_slice(cards: &[Card]) -> Result<Card, TrickError> {
    decode(&VisibleCards::from_slice(cards)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn sample_hand_hides_the_ace() {
        let e = encode(&hand("Ac 5h Jd Qc Ks")).unwrap();
        assert_eq!(e.hidden, Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(e.reference(), Card::new(Rank::Queen, Suit::Clubs));
        assert_eq!(e.offset, 2);
        // Jd < 5h < Ks by code; rank 2 is low, high, mid
        assert_eq!(e.visible.to_string(), "Qc Jd Ks 5h");
        assert_eq!(decode(&e.visible).unwrap(), e.hidden);
    }

    #[test]
    fn pair_within_six_keeps_lower_card_as_reference() {
        let e = encode(&hand("3h 7h 2c 9d Js")).unwrap();
        assert_eq!(e.reference(), Card::new(Rank::Three, Suit::Hearts));
        assert_eq!(e.hidden, Card::new(Rank::Seven, Suit::Hearts));
        assert_eq!(e.offset, 4);
        assert_eq!(decode(&e.visible).unwrap(), e.hidden);
    }

    #[test]
    fn offset_of_exactly_six_and_seven() {
        // 2s -> 8s is six steps forward
        let e = encode(&hand("2s 8s Ac Ad Ah")).unwrap();
        assert_eq!((e.reference().rank(), e.hidden.rank(), e.offset), (Rank::Two, Rank::Eight, 6));
        // 2s -> 9s is seven steps, so 9s -> 2s (six steps) is used
        let e = encode(&hand("2s 9s Ac Ad Ah")).unwrap();
        assert_eq!((e.reference().rank(), e.hidden.rank(), e.offset), (Rank::Nine, Rank::Two, 6));
    }

    #[test]
    fn wraps_around_king() {
        let e = encode(&hand("Kd 2d 5c 9h Js")).unwrap();
        assert_eq!(e.reference(), Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(e.hidden, Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(e.offset, 2);
        assert_eq!(decode(&e.visible).unwrap(), e.hidden);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = encode(&hand("Ac 5h Jd Qc Ks")).unwrap();
        let b = encode(&hand("Ks Qc Jd 5h Ac")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reference_suit_matches_hidden_suit() {
        let e = encode(&hand("4c 5d 6h 7s 8c")).unwrap();
        assert_eq!(e.reference().suit(), e.hidden.suit());
    }

    #[test]
    fn decode_rejects_duplicate_cards() {
        let err = decode_slice(&[
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
        ])
        .unwrap_err();
        assert!(matches!(err, TrickError::Hand(HandError::DuplicateCard(_))));
    }

    #[test]
    fn decode_rejects_wrong_count() {
        let err = decode_slice(&[Card::new(Rank::Ace, Suit::Clubs)]).unwrap_err();
        assert_eq!(err, TrickError::Hand(HandError::HandCount { expected: 4, got: 1 }));
    }
}
