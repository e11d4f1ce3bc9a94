//! One module per Cartan family

pub mod dual;
pub mod type_a;
pub mod type_a_affine;
pub mod type_c;
pub mod type_c_affine;

use dynkin_core::{DynkinError, MAX_RANK, Result};

/// Reject ranks outside `1..=MAX_RANK` before any diagram is built.
pub(crate) fn check_rank(letter: char, n: usize) -> Result<usize> {
    if !(1..=MAX_RANK).contains(&n) {
        return Err(DynkinError::InvalidRank { letter, rank: n });
    }
    Ok(n)
}
