//! The five teaching distributions.
//!
//! Each variant is bound to one fixed [`Family`] parameterisation; the
//! display names are the identifiers used in tables and figure filenames.

use std::fmt;
use std::str::FromStr;

use super::family::Family;
use limit_core::types::LookupError;

/// Identifier of a registry distribution.
///
/// # Examples
/// ```
/// use limit_models::DistributionKind;
///
/// let kind: DistributionKind = "pareto1.5".parse().unwrap();
/// assert_eq!(kind, DistributionKind::Pareto1_5);
/// assert_eq!(kind.name(), "Pareto(α=1.5, xₘ=1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Uniform on [0, 1).
    Uniform,
    /// Exponential with rate 1.
    Exponential,
    /// Pareto with α = 3, xₘ = 1 (finite variance).
    Pareto3,
    /// Pareto with α = 1.5, xₘ = 1 (infinite variance).
    Pareto1_5,
    /// Standard Cauchy (no mean).
    Cauchy,
}

impl DistributionKind {
    /// All kinds, in registry order.
    pub const ALL: [DistributionKind; 5] = [
        DistributionKind::Uniform,
        DistributionKind::Exponential,
        DistributionKind::Pareto3,
        DistributionKind::Pareto1_5,
        DistributionKind::Cauchy,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "Uniform(0,1)",
            DistributionKind::Exponential => "Exponential(λ=1)",
            DistributionKind::Pareto3 => "Pareto(α=3, xₘ=1)",
            DistributionKind::Pareto1_5 => "Pareto(α=1.5, xₘ=1)",
            DistributionKind::Cauchy => "Cauchy",
        }
    }

    /// Short ASCII alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Exponential => "exponential",
            DistributionKind::Pareto3 => "pareto3",
            DistributionKind::Pareto1_5 => "pareto1.5",
            DistributionKind::Cauchy => "cauchy",
        }
    }

    /// Parameterised family.
    pub fn family(&self) -> Family {
        match self {
            DistributionKind::Uniform => Family::Uniform {
                low: 0.0,
                high: 1.0,
            },
            DistributionKind::Exponential => Family::Exponential { rate: 1.0 },
            DistributionKind::Pareto3 => Family::Pareto {
                shape: 3.0,
                scale: 1.0,
            },
            DistributionKind::Pareto1_5 => Family::Pareto {
                shape: 1.5,
                scale: 1.0,
            },
            DistributionKind::Cauchy => Family::Cauchy {
                location: 0.0,
                scale: 1.0,
            },
        }
    }

    /// Density formula for the moment table.
    pub fn pdf(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "f(x) = 1, 0 ≤ x ≤ 1",
            DistributionKind::Exponential => "f(x) = e^(-x), x ≥ 0",
            DistributionKind::Pareto3 => "f(x) = 3/x⁴, x ≥ 1",
            DistributionKind::Pareto1_5 => "f(x) = 1.5/x^2.5, x ≥ 1",
            DistributionKind::Cauchy => "f(x) = 1/(π(1+x²))",
        }
    }

    /// One-line teaching note.
    pub fn notes(&self) -> &'static str {
        match self {
            DistributionKind::Uniform => "Classic case - both theorems work perfectly",
            DistributionKind::Exponential => "Skewed distribution - CLT slower due to asymmetry",
            DistributionKind::Pareto3 => "Heavy-tailed but finite variance - both theorems work",
            DistributionKind::Pareto1_5 => "Infinite variance: SLLN works but CLT does NOT",
            DistributionKind::Cauchy => "Mean undefined: neither theorem works",
        }
    }

    /// Display names of every kind, in registry order.
    pub fn known_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.name().to_string()).collect()
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = LookupError;

    /// Accepts the exact display name or the case-insensitive alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == trimmed || k.alias().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LookupError::UnknownDistribution {
                name: trimmed.to_string(),
                known: Self::known_names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        for kind in DistributionKind::ALL {
            assert_eq!(kind.name().parse::<DistributionKind>(), Ok(kind));
            assert_eq!(kind.alias().parse::<DistributionKind>(), Ok(kind));
            assert_eq!(
                kind.alias().to_uppercase().parse::<DistributionKind>(),
                Ok(kind)
            );
        }
    }

    #[test]
    fn test_parse_unknown_lists_known_names() {
        let err = "Gamma(2,1)".parse::<DistributionKind>().unwrap_err();
        match err {
            LookupError::UnknownDistribution { name, known } => {
                assert_eq!(name, "Gamma(2,1)");
                assert_eq!(known.len(), 5);
                assert_eq!(known[0], "Uniform(0,1)");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_pads_by_characters() {
        let cell = format!("{:<25}|", DistributionKind::Pareto3);
        assert_eq!(cell.chars().count(), 26);
    }

    #[test]
    fn test_families_are_valid() {
        for kind in DistributionKind::ALL {
            assert!(kind.family().validate().is_ok(), "{kind}");
        }
    }
}
