//! Decimal contract shared by every numeric proposal field.
//!
//! Fixed-point values are [`rust_decimal::Decimal`]; integer token amounts are
//! [`Int`]. An absent value is `None`, never zero: update proposals use absence
//! to mean "leave unchanged", so the helpers below refuse to treat `None` as a
//! passing value for any positivity check.

pub use rust_decimal::Decimal;

/// Integer token amount (coin amounts, staked amounts).
pub type Int = i128;

/// Sign queries required of every numeric type carried by a proposal.
pub trait Signed {
    fn is_positive_value(&self) -> bool;
    fn is_negative_value(&self) -> bool;
    fn is_zero_value(&self) -> bool;
}

impl Signed for Decimal {
    fn is_positive_value(&self) -> bool {
        self.is_sign_positive() && !self.is_zero()
    }

    fn is_negative_value(&self) -> bool {
        self.is_sign_negative() && !self.is_zero()
    }

    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

impl Signed for Int {
    fn is_positive_value(&self) -> bool {
        *self > 0
    }

    fn is_negative_value(&self) -> bool {
        *self < 0
    }

    fn is_zero_value(&self) -> bool {
        *self == 0
    }
}

/// `true` only for a present, strictly positive value.
pub fn safe_is_positive<T: Signed>(v: Option<&T>) -> bool {
    v.is_some_and(Signed::is_positive_value)
}

/// `true` only for a present value that is zero or positive.
pub fn safe_is_non_negative<T: Signed>(v: Option<&T>) -> bool {
    v.is_some_and(|v| !v.is_negative_value())
}

/// `true` for an absent value or an explicit zero.
pub fn is_zero_or_nil<T: Signed>(v: Option<&T>) -> bool {
    v.map_or(true, Signed::is_zero_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn absent_is_never_positive() {
        assert!(!safe_is_positive::<Decimal>(None));
        assert!(!safe_is_non_negative::<Decimal>(None));
        assert!(!safe_is_positive::<Int>(None));
    }

    #[test]
    fn absent_counts_as_zero_or_nil() {
        assert!(is_zero_or_nil::<Decimal>(None));
        assert!(is_zero_or_nil(Some(&dec!(0))));
        assert!(!is_zero_or_nil(Some(&dec!(0.0001))));
        assert!(is_zero_or_nil::<Int>(Some(&0)));
    }

    #[test]
    fn negative_zero_is_zero() {
        let neg_zero = -dec!(0.00);
        assert!(!safe_is_positive(Some(&neg_zero)));
        assert!(safe_is_non_negative(Some(&neg_zero)));
    }

    #[test]
    fn sign_queries() {
        assert!(safe_is_positive(Some(&dec!(0.5))));
        assert!(!safe_is_positive(Some(&dec!(-0.5))));
        assert!(!safe_is_non_negative(Some(&dec!(-0.5))));
        assert!(safe_is_non_negative::<Int>(Some(&0)));
        assert!(!safe_is_non_negative::<Int>(Some(&-1)));
    }
}
