use std::fmt;
use std::str::FromStr;

/// Number of ranks in a suit.
pub const RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const DECK_SIZE: u8 = 52;

/// Card ranks from Ace (0) to King (12). Arithmetic on ranks is cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a value in `0..13`, `None` otherwise.
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v < RANKS {
            Some(Self::ALL[v as usize])
        } else {
            None
        }
    }

    /// Cyclic forward distance from `self` to `other`, in `0..13`.
    ///
    /// ```
    /// use five_card_trick::cards::Rank;
    ///
    /// assert_eq!(Rank::Queen.offset_to(Rank::Ace), 2);
    /// assert_eq!(Rank::Ace.offset_to(Rank::Queen), 11);
    /// ```
    pub const fn offset_to(self, other: Rank) -> u8 {
        (other.value() + RANKS - self.value()) % RANKS
    }

    /// The rank `by` steps forward of `self`, wrapping King to Ace.
    pub const fn shifted(self, by: u8) -> Rank {
        Self::ALL[((self.value() as u16 + by as u16) % RANKS as u16) as usize]
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t {
            "10" => Ok(Rank::Ten),
            _ => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::try_from(c),
                    _ => Err(RankParseError::Invalid(s.to_string())),
                }
            }
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Rank::ALL
            .into_iter()
            .find(|r| r.to_char() == c.to_ascii_uppercase())
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

/// Four suits; the order carries no game meaning but is fixed: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(v: u8) -> Option<Suit> {
        if v < 4 {
            Some(Self::ALL[v as usize])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Singular name, as used when describing a single card.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Club",
            Suit::Diamonds => "Diamond",
            Suit::Hearts => "Heart",
            Suit::Spades => "Spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "club" | "clubs" => Ok(Suit::Clubs),
            "diamond" | "diamonds" => Ok(Suit::Diamonds),
            "heart" | "hearts" => Ok(Suit::Hearts),
            "spade" | "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card code must be between 0 and 51 (inclusive), got {0}")]
    InvalidCode(i32),
}

/// A playing card: suit + rank.
///
/// Cards are ordered by their code (`suit * 13 + rank`), so all clubs come
/// before all diamonds, and so on. The order only serves to make sorting
/// deterministic.
///
/// ```
/// use five_card_trick::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Clubs);
/// assert_eq!(card.to_string(), "Qc");
/// assert_eq!(card.code(), 11);
/// assert_eq!(Card::from_code(11).unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    // Field order drives the derived `Ord`: suit first, then rank.
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Position of the card in a standard deck, in `0..52`.
    pub const fn code(self) -> u8 {
        self.suit.value() * RANKS + self.rank.value()
    }

    pub fn from_code(code: i32) -> Result<Self, CardError> {
        u8::try_from(code)
            .ok()
            .and_then(|c| Card::try_from(c).ok())
            .ok_or(CardError::InvalidCode(code))
    }
}

impl TryFrom<u8> for Card {
    type Error = CardError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match (Suit::from_value(code / RANKS), Rank::from_value(code % RANKS)) {
            (Some(suit), Some(rank)) => Ok(Card::new(rank, suit)),
            _ => Err(CardError::InvalidCode(i32::from(code))),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // rank is everything but the last char ("10" allowed); suit is the last char
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use five_card_trick::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ac, 5h 10d").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
/// assert_eq!(cards[1], Card::new(Rank::Five, Suit::Hearts));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Diamonds));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
