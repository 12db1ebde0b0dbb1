//! five-card-trick: the classic five-card magic trick as a library
//!
//! One person is handed five cards, hides one, and passes the other four to a
//! partner in a chosen order. From the four cards alone the partner names
//! the hidden card.
//!
//! - Pure functions over small `Copy` values
//! - No panics for invalid input; errors are returned as `Result`
//!
//! ## Quick start
//! ```
//! use five_card_trick::hand::Hand;
//! use five_card_trick::trick::{decode, encode};
//!
//! let hand: Hand = "Ac 5h Jd Qc Ks".parse().unwrap();
//! let encoding = encode(&hand).unwrap();
//! assert_eq!(encoding.hidden.to_string(), "Ac");
//! assert_eq!(encoding.visible.to_string(), "Qc Jd Ks 5h");
//! assert_eq!(decode(&encoding.visible).unwrap(), encoding.hidden);
//! ```
//!
//! ## Demo
//! ```sh
//! cargo run --bin five-card-trick -- Ac 5h Jd Qc Ks
//! ```

pub mod cards;
pub mod deck;
pub mod display;
pub mod hand;
pub mod permutation;
pub mod trick;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
