//! Theoretical moment values.
//!
//! A theoretical mean or variance is either a finite number, infinite
//! (the defining integral diverges to +∞, e.g. Pareto variance for α ≤ 2),
//! or undefined (the integral does not converge at all, e.g. Cauchy).
//! [`Moment`] models that explicitly so that every branch on it is
//! exhaustive and checked by the compiler.

use std::fmt;

use super::error::MomentError;

/// A theoretical moment of a probability distribution.
///
/// # Examples
/// ```
/// use limit_core::types::Moment;
///
/// let mean = Moment::Finite(1.5);
/// assert_eq!(mean.value(), Some(1.5));
/// assert_eq!(format!("{:.4}", mean), "1.5000");
///
/// assert_eq!(Moment::Infinite.to_string(), "INFINITE");
/// assert_eq!(Moment::Undefined.to_string(), "UNDEFINED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moment {
    /// The moment exists and is finite.
    Finite(f64),
    /// The moment diverges to +∞.
    Infinite,
    /// The moment does not exist.
    Undefined,
}

impl Moment {
    /// Returns the finite value, if any.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Moment::Finite(v) => Some(v),
            Moment::Infinite | Moment::Undefined => None,
        }
    }

    /// Returns `true` for [`Moment::Finite`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Moment::Finite(_))
    }

    /// Square root of a variance, giving the standard deviation.
    ///
    /// Infinite and undefined states carry over unchanged.
    ///
    /// # Examples
    /// ```
    /// use limit_core::types::Moment;
    ///
    /// assert_eq!(Moment::Finite(0.25).sqrt(), Moment::Finite(0.5));
    /// assert_eq!(Moment::Infinite.sqrt(), Moment::Infinite);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Moment {
        match self {
            Moment::Finite(v) => Moment::Finite(v.sqrt()),
            other => other,
        }
    }

    /// Returns the finite value or a [`MomentError::NotFinite`] naming the moment.
    ///
    /// # Errors
    ///
    /// Fails when the moment is [`Moment::Infinite`] or [`Moment::Undefined`].
    pub fn require_finite(self, moment: &'static str) -> Result<f64, MomentError> {
        self.value().ok_or(MomentError::NotFinite {
            moment,
            state: self,
        })
    }
}

impl fmt::Display for Moment {
    /// Finite values honour the formatter precision; the special states
    /// render as `INFINITE` and `UNDEFINED`. Width is not applied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Moment::Finite(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Moment::Infinite => f.write_str("INFINITE"),
            Moment::Undefined => f.write_str("UNDEFINED"),
        }
    }
}

impl From<f64> for Moment {
    /// `+∞` maps to [`Moment::Infinite`], `NaN` to [`Moment::Undefined`].
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Moment::Undefined
        } else if value == f64::INFINITY {
            Moment::Infinite
        } else {
            Moment::Finite(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_finiteness() {
        assert_eq!(Moment::Finite(3.0).value(), Some(3.0));
        assert!(Moment::Finite(3.0).is_finite());
        assert_eq!(Moment::Infinite.value(), None);
        assert!(!Moment::Undefined.is_finite());
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.4}", Moment::Finite(1.0 / 12.0)), "0.0833");
        assert_eq!(format!("{:.6}", Moment::Finite(3.0)), "3.000000");
        assert_eq!(format!("{}", Moment::Finite(0.5)), "0.5");
        assert_eq!(format!("{:.4}", Moment::Infinite), "INFINITE");
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(Moment::Finite(0.75).require_finite("variance"), Ok(0.75));

        let err = Moment::Infinite.require_finite("variance").unwrap_err();
        assert_eq!(
            err,
            MomentError::NotFinite {
                moment: "variance",
                state: Moment::Infinite
            }
        );
        assert!(err.to_string().contains("variance"));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Moment::from(f64::INFINITY), Moment::Infinite);
        assert_eq!(Moment::from(f64::NAN), Moment::Undefined);
        assert_eq!(Moment::from(2.0), Moment::Finite(2.0));
    }
}
