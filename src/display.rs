//! Long-form card text for console output.

use crate::cards::Card;

/// Describe a card by suit and rank name, padded so lists line up.
///
/// ```
/// use five_card_trick::cards::{Card, Rank, Suit};
/// use five_card_trick::display::describe;
///
/// let text = describe(Card::new(Rank::Ace, Suit::Clubs));
/// assert_eq!(text, "Suit:    Club,\tSymbol:  Ace");
/// ```
pub fn describe(card: Card) -> String {
    format!("Suit: {:>7},\tSymbol: {:>4}", card.suit().name(), card.rank().name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn long_names_are_right_aligned() {
        assert_eq!(
            describe(Card::new(Rank::Queen, Suit::Diamonds)),
            "Suit: Diamond,\tSymbol: Queen"
        );
        assert_eq!(describe(Card::new(Rank::Two, Suit::Spades)), "Suit:   Spade,\tSymbol:  Two");
        assert_eq!(describe(Card::new(Rank::King, Suit::Hearts)), "Suit:   Heart,\tSymbol: King");
    }
}
