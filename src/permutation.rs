//! Ranking of the six orderings of three distinct items.
//!
//! Three cards can be laid down in 3! = 6 orders. Given a fixed total order
//! over cards, the order they were laid down in names a number from 1 to 6.
//! [`permutation_rank`] reads that number back and [`arrange`] produces it.

use log::trace;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PermutationError {
    #[error("items compare equal; three distinct items are required")]
    Tied,
    #[error("inconsistent ordering: a<b={ab}, b<c={bc}, a<c={ac}")]
    Inconsistent { ab: bool, bc: bool, ac: bool },
    #[error("permutation rank must be between 1 and 6, got {0}")]
    RankOutOfRange(u8),
}

/// Smallest permutation rank.
pub const MIN_RANK: u8 = 1;
/// Largest permutation rank.
pub const MAX_RANK: u8 = 6;

/// Rank in `1..=6` of the order `a, b, c` was laid down in.
///
/// Only the outcome of the three comparisons matters, never the values
/// themselves:
///
/// | shape          | rank |
/// |----------------|------|
/// | low mid high   | 1    |
/// | low high mid   | 2    |
/// | mid low high   | 3    |
/// | mid high low   | 4    |
/// | high low mid   | 5    |
/// | high mid low   | 6    |
///
/// ```
/// use five_card_trick::permutation::permutation_rank;
///
/// assert_eq!(permutation_rank(&1, &2, &3).unwrap(), 1);
/// assert_eq!(permutation_rank(&10, &30, &20).unwrap(), 2);
/// assert_eq!(permutation_rank(&3, &2, &1).unwrap(), 6);
/// ```
pub fn permutation_rank<T: Ord + ?Sized>(a: &T, b: &T, c: &T) -> Result<u8, PermutationError> {
    if a == b || b == c || a == c {
        return Err(PermutationError::Tied);
    }
    let (ab, bc, ac) = (a < b, b < c, a < c);
    trace!("permutation pattern a<b={ab} b<c={bc} a<c={ac}");
    match (ab, bc, ac) {
        (true, true, true) => Ok(1),
        (true, false, true) => Ok(2),
        (false, true, true) => Ok(3),
        (true, false, false) => Ok(4),
        (false, true, false) => Ok(5),
        (false, false, false) => Ok(6),
        // a<b<c yet c<a, or the mirror image: not a total order
        (true, true, false) | (false, false, true) => {
            Err(PermutationError::Inconsistent { ab, bc, ac })
        }
    }
}

/// Reorder `items` so that [`permutation_rank`] of the result is `rank`.
///
/// The items are sorted ascending for ranks 1 to 3 and descending for 4 to 6,
/// then corrected by one swap: none for 1 and 6, the last two for 2 and 5,
/// the first two for 3 and 4.
///
/// ```
/// use five_card_trick::permutation::{arrange, permutation_rank};
///
/// let xs = arrange([7, 3, 5], 4).unwrap();
/// assert_eq!(xs, [5, 7, 3]);
/// assert_eq!(permutation_rank(&xs[0], &xs[1], &xs[2]).unwrap(), 4);
/// ```
pub fn arrange<T: Ord + Copy>(items: [T; 3], rank: u8) -> Result<[T; 3], PermutationError> {
    if !(MIN_RANK..=MAX_RANK).contains(&rank) {
        return Err(PermutationError::RankOutOfRange(rank));
    }
    let mut out = items;
    if rank <= 3 {
        out.sort_unstable();
    } else {
        out.sort_unstable_by(|x, y| y.cmp(x));
    }
    match rank {
        2 | 5 => out.swap(1, 2),
        3 | 4 => out.swap(0, 1),
        _ => {}
    }
    Ok(out)
}
