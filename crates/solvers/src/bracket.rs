use thiserror::Error;

/// Errors that can occur when validating a search interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    #[error("bracket contains non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("bracket [{left}, {right}] is empty: left must be less than right")]
    Empty { left: f64, right: f64 },
}

/// A validated search interval `[left, right]` with `left < right`.
///
/// Solvers narrow the bounds in place; they never cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

impl Bracket {
    /// Validates `[a, b]` as a search interval.
    ///
    /// Reversed bounds are rejected rather than swapped.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() {
            return Err(BracketError::NonFinite { value: left });
        }
        if !right.is_finite() {
            return Err(BracketError::NonFinite { value: right });
        }
        if left >= right {
            return Err(BracketError::Empty { left, right });
        }

        Ok(Self { left, right })
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(crate) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_bounds() {
        let bracket = Bracket::new([-1.0, 3.0]).expect("valid bracket");

        assert_relative_eq!(bracket.width(), 4.0);
        assert_relative_eq!(bracket.midpoint(), 1.0);
        assert_eq!(bracket.bounds(), [-1.0, 3.0]);
    }

    #[test]
    fn rejects_reversed_and_degenerate_bounds() {
        assert_eq!(
            Bracket::new([3.0, -1.0]),
            Err(BracketError::Empty {
                left: 3.0,
                right: -1.0
            })
        );
        assert!(matches!(
            Bracket::new([2.0, 2.0]),
            Err(BracketError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Bracket::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
        assert_eq!(
            Bracket::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite {
                value: f64::INFINITY
            })
        );
    }
}
