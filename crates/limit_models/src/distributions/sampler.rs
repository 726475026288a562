//! Samplers for the distribution families.
//!
//! [`Sampler`] is a closed enum over `rand_distr` distributions, so every
//! draw is a `match` rather than a virtual call. It implements
//! [`rand_distr::Distribution<f64>`], which is the sampling capability the
//! simulators accept; [`FnSampler`] adapts a plain function for synthetic
//! or ad-hoc generators.

use rand::{Rng, RngCore};
use rand_distr::{Cauchy, Distribution, Exp, Pareto, Uniform};

use super::family::Family;
use limit_core::types::MomentError;

/// Statically dispatched sampler for a [`Family`].
///
/// Pareto draws follow the type I convention: support starts at the scale
/// parameter, i.e. a standard Pareto(α) variate plus one when `scale = 1`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rand_distr::Distribution;
/// use limit_models::{Family, Sampler};
///
/// let sampler = Sampler::new(Family::Pareto { shape: 3.0, scale: 1.0 }).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// assert!(sampler.sample(&mut rng) >= 1.0);
/// ```
#[derive(Debug, Clone)]
pub enum Sampler {
    /// Uniform on `[low, high)`.
    Uniform(Uniform<f64>),
    /// Exponential with rate λ.
    Exponential(Exp<f64>),
    /// Pareto type I.
    Pareto(Pareto<f64>),
    /// Cauchy.
    Cauchy(Cauchy<f64>),
}

fn rejected(name: &'static str, value: f64) -> MomentError {
    MomentError::InvalidParameter {
        name,
        value,
        reason: "rejected by sampler",
    }
}

impl Sampler {
    /// Builds the sampler for `family` after validating its parameters.
    ///
    /// # Errors
    ///
    /// [`MomentError::InvalidParameter`] when the parameters are outside
    /// their domain.
    pub fn new(family: Family) -> Result<Self, MomentError> {
        family.validate()?;
        Ok(match family {
            Family::Uniform { low, high } => Sampler::Uniform(Uniform::new(low, high)),
            Family::Exponential { rate } => {
                Sampler::Exponential(Exp::new(rate).map_err(|_| rejected("rate", rate))?)
            }
            Family::Pareto { shape, scale } => Sampler::Pareto(
                Pareto::new(scale, shape).map_err(|_| rejected("shape", shape))?,
            ),
            Family::Cauchy { location, scale } => Sampler::Cauchy(
                Cauchy::new(location, scale).map_err(|_| rejected("scale", scale))?,
            ),
        })
    }
}

impl Distribution<f64> for Sampler {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Uniform(d) => d.sample(rng),
            Sampler::Exponential(d) => d.sample(rng),
            Sampler::Pareto(d) => d.sample(rng),
            Sampler::Cauchy(d) => d.sample(rng),
        }
    }
}

/// Adapts a function of the random source into a [`Distribution<f64>`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rand_distr::Distribution;
/// use limit_models::FnSampler;
///
/// let constant = FnSampler(|_: &mut dyn rand::RngCore| 0.5);
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(constant.sample(&mut rng), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSampler<F>(pub F);

impl<F> Distribution<f64> for FnSampler<F>
where
    F: Fn(&mut dyn RngCore) -> f64,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut source = rng;
        (self.0)(&mut source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn draw(sampler: &Sampler, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        sampler.sample_iter(&mut rng).take(n).collect()
    }

    #[test]
    fn test_uniform_support() {
        let sampler = Sampler::new(Family::Uniform { low: 0.0, high: 1.0 }).unwrap();
        for x in draw(&sampler, 10_000, 1) {
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_pareto_support_starts_at_scale() {
        let sampler = Sampler::new(Family::Pareto { shape: 1.5, scale: 1.0 }).unwrap();
        for x in draw(&sampler, 10_000, 2) {
            assert!(x >= 1.0);
        }
    }

    #[test]
    fn test_exponential_mean() {
        let sampler = Sampler::new(Family::Exponential { rate: 1.0 }).unwrap();
        let xs = draw(&sampler, 200_000, 3);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!((mean - 1.0).abs() < 0.02, "mean={mean}");
        assert!(xs.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_cauchy_median_near_zero() {
        let sampler = Sampler::new(Family::Cauchy { location: 0.0, scale: 1.0 }).unwrap();
        let mut xs = draw(&sampler, 100_001, 4);
        xs.sort_by(f64::total_cmp);
        let median = xs[xs.len() / 2];
        assert!(median.abs() < 0.03, "median={median}");
    }

    #[test]
    fn test_invalid_family_rejected() {
        assert!(Sampler::new(Family::Exponential { rate: -1.0 }).is_err());
        assert!(Sampler::new(Family::Uniform { low: 2.0, high: 1.0 }).is_err());
    }

    #[test]
    fn test_fn_sampler_sees_rng() {
        let sampler = FnSampler(|rng: &mut dyn RngCore| rng.gen::<f64>() + 10.0);
        let mut rng = StdRng::seed_from_u64(5);
        let x = sampler.sample(&mut rng);
        assert!((10.0..11.0).contains(&x));
    }
}
