//! Distribution registry.
//!
//! The registry is a fixed table of [`DistributionSpec`] entries, one per
//! [`DistributionKind`], in a stable order. Moments are computed from the
//! family parameters and the theorem flags are derived from the moments,
//! so the table cannot contradict the closed-form formulas.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

use crate::distributions::{DistributionKind, Sampler};
use crate::theorems::Theorem;
use limit_core::types::{LookupError, Moment, MomentError};

/// Everything the registry knows about one distribution.
#[derive(Debug, Clone)]
pub struct DistributionSpec {
    /// Identifier.
    pub kind: DistributionKind,
    /// Display name.
    pub name: &'static str,
    /// Theoretical mean.
    pub mean: Moment,
    /// Theoretical variance.
    pub variance: Moment,
    /// Theoretical standard deviation.
    pub std_dev: Moment,
    /// Whether the SLLN applies.
    pub slln_applies: bool,
    /// Whether the CLT applies.
    pub clt_applies: bool,
    /// Density formula.
    pub pdf: &'static str,
    /// Teaching note.
    pub notes: &'static str,
    sampler: Sampler,
}

impl DistributionSpec {
    /// Builds the registry entry for `kind`.
    ///
    /// # Errors
    ///
    /// Propagates [`MomentError`] from the family parameters.
    pub fn from_kind(kind: DistributionKind) -> Result<Self, MomentError> {
        let family = kind.family();
        let mean = family.mean()?;
        let variance = family.variance()?;
        Ok(Self {
            kind,
            name: kind.name(),
            mean,
            variance,
            std_dev: variance.sqrt(),
            slln_applies: Theorem::Slln.applies(mean, variance),
            clt_applies: Theorem::Clt.applies(mean, variance),
            pdf: kind.pdf(),
            notes: kind.notes(),
            sampler: Sampler::new(family)?,
        })
    }

    /// The sampler for this distribution.
    #[inline]
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Whether `theorem` applies.
    pub fn applies(&self, theorem: Theorem) -> bool {
        match theorem {
            Theorem::Slln => self.slln_applies,
            Theorem::Clt => self.clt_applies,
        }
    }

    /// First `count` draws from a generator seeded with `seed`.
    ///
    /// # Examples
    /// ```
    /// use limit_models::{DistributionKind, DistributionSpec};
    ///
    /// let spec = DistributionSpec::from_kind(DistributionKind::Uniform).unwrap();
    /// let a = spec.preview(5, 42);
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(a, spec.preview(5, 42));
    /// ```
    pub fn preview(&self, count: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (&self.sampler).sample_iter(&mut rng).take(count).collect()
    }
}

impl Distribution<f64> for DistributionSpec {
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sampler.sample(rng)
    }
}

/// Ordered table of distribution specifications.
///
/// # Examples
/// ```
/// use limit_models::Registry;
///
/// let registry = Registry::standard().unwrap();
/// assert_eq!(registry.len(), 5);
/// assert!(registry.lookup("Weibull").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<DistributionSpec>,
}

impl Registry {
    /// The five teaching distributions.
    ///
    /// # Errors
    ///
    /// Propagates [`MomentError`] should a family be misparameterised.
    pub fn standard() -> Result<Self, MomentError> {
        Self::from_kinds(&DistributionKind::ALL)
    }

    /// A registry restricted to `kinds`, in the given order.
    ///
    /// # Errors
    ///
    /// Propagates [`MomentError`] from the family parameters.
    pub fn from_kinds(kinds: &[DistributionKind]) -> Result<Self, MomentError> {
        let entries = kinds
            .iter()
            .map(|&k| DistributionSpec::from_kind(k))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &DistributionSpec> {
        self.entries.iter()
    }

    /// Entry for `kind`, if registered.
    pub fn get(&self, kind: DistributionKind) -> Option<&DistributionSpec> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Entry for a display name or alias.
    ///
    /// # Errors
    ///
    /// - [`LookupError::EmptyRegistry`] when nothing is registered
    /// - [`LookupError::UnknownDistribution`] listing the registered names
    pub fn lookup(&self, name: &str) -> Result<&DistributionSpec, LookupError> {
        if self.entries.is_empty() {
            return Err(LookupError::EmptyRegistry);
        }
        name.parse::<DistributionKind>()
            .ok()
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| LookupError::UnknownDistribution {
                name: name.trim().to_string(),
                known: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    /// Display names in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Names of the entries where `theorem` does or does not apply.
    pub fn partition_by(&self, theorem: Theorem) -> (Vec<&'static str>, Vec<&'static str>) {
        let (works, fails): (Vec<_>, Vec<_>) =
            self.entries.iter().partition(|e| e.applies(theorem));
        (
            works.into_iter().map(|e| e.name).collect(),
            fails.into_iter().map(|e| e.name).collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DistributionSpec;
    type IntoIter = std::slice::Iter<'a, DistributionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
