//! The one-way permutation and hardcore predicate a commitment is built from.
//!
//! The schemes only rely on both being deterministic: the verifier recomputes
//! them from the revealed secret. Hiding rests on the predicate being hard to
//! guess from the permutation's output, binding on the permutation being hard
//! to invert.
use rug::Integer;

pub mod bbs;

pub use bbs::BlumBlumShub;

pub trait OneWayPermutation {
    fn permute(&self, x: &Integer) -> Integer;
}

pub trait HardcorePredicate {
    fn predicate(&self, x: &Integer) -> bool;
}

/// Maps every value to itself. Offers no hiding or binding, only useful to
/// reproduce scenarios by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl OneWayPermutation for Identity {
    fn permute(&self, x: &Integer) -> Integer {
        x.clone()
    }
}

/// Parity of the number of one bits in the absolute value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parity;

impl HardcorePredicate for Parity {
    fn predicate(&self, x: &Integer) -> bool {
        x.as_abs().count_ones().map_or(false, |ones| ones % 2 == 1)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LeastSignificantBit;

impl HardcorePredicate for LeastSignificantBit {
    fn predicate(&self, x: &Integer) -> bool {
        x.is_odd()
    }
}

#[cfg(test)]
mod test {
    use super::{HardcorePredicate, Identity, LeastSignificantBit, OneWayPermutation, Parity};
    use rug::Integer;

    #[test]
    fn test_identity() {
        let x = Integer::from(45782);
        assert_eq!(Identity.permute(&x), x);
    }

    #[test]
    fn test_parity_counts_ones() {
        // 6 = 0b110, 7 = 0b111
        assert!(!Parity.predicate(&Integer::from(6)));
        assert!(Parity.predicate(&Integer::from(7)));
        assert!(!Parity.predicate(&Integer::from(0)));
        assert!(Parity.predicate(&Integer::from(-7)));
    }

    #[test]
    fn test_least_significant_bit() {
        assert!(!LeastSignificantBit.predicate(&Integer::from(6)));
        assert!(LeastSignificantBit.predicate(&Integer::from(7)));
        assert!(LeastSignificantBit.predicate(&Integer::from(-7)));
    }
}
