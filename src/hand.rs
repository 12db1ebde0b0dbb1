use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("expected exactly {expected} cards, got {got}")]
    HandCount { expected: usize, got: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|&(i, c)| cards[..i].contains(c))
        .map(|(_, c)| *c)
}

fn check_distinct(cards: &[Card]) -> Result<(), HandError> {
    match first_duplicate(cards) {
        Some(card) => Err(HandError::DuplicateCard(card)),
        None => Ok(()),
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

/// Five pairwise-distinct cards handed to the encoder.
///
/// ```
/// use five_card_trick::hand::Hand;
///
/// let hand: Hand = "Ac 5h Jd Qc Ks".parse().unwrap();
/// assert_eq!(hand.to_string(), "Ac 5h Jd Qc Ks");
/// assert!("Ac Ac Jd Qc Ks".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    pub const SIZE: usize = 5;

    pub fn try_new(cards: [Card; 5]) -> Result<Self, HandError> {
        check_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] = slice.try_into().map_err(|_| HandError::HandCount {
            expected: Self::SIZE,
            got: slice.len(),
        })?;
        Self::try_new(cards)
    }

    pub fn as_array(&self) -> [Card; 5] {
        self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

/// The four cards passed from encoder to decoder, in order.
///
/// The first card is the reference card; the order of the other three
/// carries the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleCards([Card; 4]);

impl VisibleCards {
    pub const SIZE: usize = 4;

    pub fn try_new(cards: [Card; 4]) -> Result<Self, HandError> {
        check_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 4] = slice.try_into().map_err(|_| HandError::HandCount {
            expected: Self::SIZE,
            got: slice.len(),
        })?;
        Self::try_new(cards)
    }

    pub fn reference(&self) -> Card {
        self.0[0]
    }

    /// The three cards after the reference card, in order.
    pub fn signal(&self) -> [Card; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    pub fn as_array(&self) -> [Card; 4] {
        self.0
    }
}

impl FromStr for VisibleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for VisibleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}
