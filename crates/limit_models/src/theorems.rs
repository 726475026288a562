//! Limit theorems and their moment requirements.

use std::fmt;

use limit_core::types::Moment;

/// A classical limit theorem illustrated by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theorem {
    /// Strong Law of Large Numbers: needs a finite mean.
    Slln,
    /// Central Limit Theorem: needs a finite mean and a finite variance.
    Clt,
}

impl Theorem {
    /// Whether the theorem's moment conditions hold.
    ///
    /// # Examples
    /// ```
    /// use limit_core::Moment;
    /// use limit_models::Theorem;
    ///
    /// assert!(Theorem::Slln.applies(Moment::Finite(3.0), Moment::Infinite));
    /// assert!(!Theorem::Clt.applies(Moment::Finite(3.0), Moment::Infinite));
    /// ```
    pub fn applies(&self, mean: Moment, variance: Moment) -> bool {
        match self {
            Theorem::Slln => mean.is_finite(),
            Theorem::Clt => mean.is_finite() && variance.is_finite(),
        }
    }

    /// Requirement in text form.
    pub fn requirement(&self) -> &'static str {
        match self {
            Theorem::Slln => "E[X] < ∞",
            Theorem::Clt => "E[X] < ∞ AND Var(X) < ∞",
        }
    }

    /// Abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Theorem::Slln => "SLLN",
            Theorem::Clt => "CLT",
        }
    }
}

impl fmt::Display for Theorem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clt_implies_slln_over_all_states() {
        let states = [Moment::Finite(1.0), Moment::Infinite, Moment::Undefined];
        for &mean in &states {
            for &variance in &states {
                if Theorem::Clt.applies(mean, variance) {
                    assert!(Theorem::Slln.applies(mean, variance));
                }
            }
        }
    }

    #[test]
    fn test_undefined_mean_blocks_both() {
        assert!(!Theorem::Slln.applies(Moment::Undefined, Moment::Undefined));
        assert!(!Theorem::Clt.applies(Moment::Undefined, Moment::Finite(1.0)));
    }
}
