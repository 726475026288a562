//! Parametric distribution families.
//!
//! Each family knows how to validate its parameters and evaluate its
//! theoretical mean and variance in closed form.
//!
//! | Family | Mean | Variance |
//! |--------|------|----------|
//! | Uniform(a, b) | (a + b) / 2 | (b − a)² / 12 |
//! | Exponential(λ) | 1 / λ | 1 / λ² |
//! | Pareto(α, xₘ) | α·xₘ / (α − 1) for α > 1, else ∞ | α·xₘ² / ((α − 1)²(α − 2)) for α > 2, else ∞ |
//! | Cauchy(x₀, γ) | undefined | undefined |

use limit_core::types::{Moment, MomentError};

/// A parametric family with concrete parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Continuous uniform on `[low, high)`.
    Uniform {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// Exponential with rate λ.
    Exponential {
        /// Rate λ
        rate: f64,
    },
    /// Pareto (type I) with support `[scale, ∞)`.
    Pareto {
        /// Tail index α
        shape: f64,
        /// Minimum value xₘ
        scale: f64,
    },
    /// Cauchy with median `location` and half-width `scale`.
    Cauchy {
        /// Median x₀
        location: f64,
        /// Half-width γ
        scale: f64,
    },
}

fn positive(name: &'static str, value: f64) -> Result<(), MomentError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MomentError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), MomentError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MomentError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

impl Family {
    /// Checks the parameters against their domains.
    ///
    /// # Errors
    ///
    /// [`MomentError::InvalidParameter`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), MomentError> {
        match *self {
            Family::Uniform { low, high } => {
                finite("low", low)?;
                finite("high", high)?;
                if high <= low {
                    return Err(MomentError::InvalidParameter {
                        name: "high",
                        value: high,
                        reason: "must exceed low",
                    });
                }
                Ok(())
            }
            Family::Exponential { rate } => positive("rate", rate),
            Family::Pareto { shape, scale } => {
                positive("shape", shape)?;
                positive("scale", scale)
            }
            Family::Cauchy { location, scale } => {
                finite("location", location)?;
                positive("scale", scale)
            }
        }
    }

    /// Theoretical mean.
    ///
    /// # Examples
    /// ```
    /// use limit_core::Moment;
    /// use limit_models::Family;
    ///
    /// let pareto = Family::Pareto { shape: 3.0, scale: 1.0 };
    /// assert_eq!(pareto.mean().unwrap(), Moment::Finite(1.5));
    ///
    /// let cauchy = Family::Cauchy { location: 0.0, scale: 1.0 };
    /// assert_eq!(cauchy.mean().unwrap(), Moment::Undefined);
    /// ```
    pub fn mean(&self) -> Result<Moment, MomentError> {
        self.validate()?;
        Ok(match *self {
            Family::Uniform { low, high } => Moment::Finite((low + high) / 2.0),
            Family::Exponential { rate } => Moment::Finite(1.0 / rate),
            Family::Pareto { shape, scale } => {
                if shape > 1.0 {
                    Moment::Finite(shape * scale / (shape - 1.0))
                } else {
                    Moment::Infinite
                }
            }
            Family::Cauchy { .. } => Moment::Undefined,
        })
    }

    /// Theoretical variance.
    ///
    /// # Examples
    /// ```
    /// use limit_core::Moment;
    /// use limit_models::Family;
    ///
    /// let heavy = Family::Pareto { shape: 1.5, scale: 1.0 };
    /// assert_eq!(heavy.variance().unwrap(), Moment::Infinite);
    /// ```
    pub fn variance(&self) -> Result<Moment, MomentError> {
        self.validate()?;
        Ok(match *self {
            Family::Uniform { low, high } => Moment::Finite((high - low).powi(2) / 12.0),
            Family::Exponential { rate } => Moment::Finite(1.0 / (rate * rate)),
            Family::Pareto { shape, scale } => {
                if shape > 2.0 {
                    Moment::Finite(
                        shape * scale * scale / ((shape - 1.0).powi(2) * (shape - 2.0)),
                    )
                } else {
                    Moment::Infinite
                }
            }
            Family::Cauchy { .. } => Moment::Undefined,
        })
    }

    /// Short family name.
    pub fn family_name(&self) -> &'static str {
        match self {
            Family::Uniform { .. } => "Uniform",
            Family::Exponential { .. } => "Exponential",
            Family::Pareto { .. } => "Pareto",
            Family::Cauchy { .. } => "Cauchy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_moments() {
        let f = Family::Uniform { low: 0.0, high: 1.0 };
        assert_eq!(f.mean().unwrap(), Moment::Finite(0.5));
        assert_relative_eq!(f.variance().unwrap().value().unwrap(), 1.0 / 12.0);

        let wide = Family::Uniform { low: -2.0, high: 4.0 };
        assert_eq!(wide.mean().unwrap(), Moment::Finite(1.0));
        assert_relative_eq!(wide.variance().unwrap().value().unwrap(), 3.0);
    }

    #[test]
    fn test_exponential_moments() {
        let f = Family::Exponential { rate: 2.0 };
        assert_eq!(f.mean().unwrap(), Moment::Finite(0.5));
        assert_eq!(f.variance().unwrap(), Moment::Finite(0.25));
    }

    #[test]
    fn test_pareto_moment_regimes() {
        let light = Family::Pareto { shape: 3.0, scale: 1.0 };
        assert_eq!(light.mean().unwrap(), Moment::Finite(1.5));
        assert_eq!(light.variance().unwrap(), Moment::Finite(0.75));

        let heavy = Family::Pareto { shape: 1.5, scale: 1.0 };
        assert_eq!(heavy.mean().unwrap(), Moment::Finite(3.0));
        assert_eq!(heavy.variance().unwrap(), Moment::Infinite);

        let boundary = Family::Pareto { shape: 2.0, scale: 1.0 };
        assert_eq!(boundary.variance().unwrap(), Moment::Infinite);

        let very_heavy = Family::Pareto { shape: 0.8, scale: 1.0 };
        assert_eq!(very_heavy.mean().unwrap(), Moment::Infinite);
    }

    #[test]
    fn test_pareto_scale_enters_moments() {
        let f = Family::Pareto { shape: 4.0, scale: 2.0 };
        // 4·2/3 and 4·4/(9·2)
        assert_relative_eq!(f.mean().unwrap().value().unwrap(), 8.0 / 3.0);
        assert_relative_eq!(f.variance().unwrap().value().unwrap(), 16.0 / 18.0);
    }

    #[test]
    fn test_cauchy_moments_undefined() {
        let f = Family::Cauchy { location: 0.0, scale: 1.0 };
        assert_eq!(f.mean().unwrap(), Moment::Undefined);
        assert_eq!(f.variance().unwrap(), Moment::Undefined);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            Family::Uniform { low: 1.0, high: 1.0 }.validate(),
            Err(MomentError::InvalidParameter { name: "high", .. })
        ));
        assert!(matches!(
            Family::Exponential { rate: 0.0 }.mean(),
            Err(MomentError::InvalidParameter { name: "rate", .. })
        ));
        assert!(matches!(
            Family::Pareto { shape: 3.0, scale: -1.0 }.variance(),
            Err(MomentError::InvalidParameter { name: "scale", .. })
        ));
        assert!(matches!(
            Family::Cauchy { location: f64::NAN, scale: 1.0 }.validate(),
            Err(MomentError::InvalidParameter { name: "location", .. })
        ));
    }
}
