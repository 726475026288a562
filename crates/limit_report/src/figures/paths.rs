//! Output file layout.

use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Replaces `(` with `_` and drops `)`, `,` and `=`.
///
/// # Examples
/// ```
/// use limit_report::figures::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Uniform(0,1)"), "Uniform_01");
/// assert_eq!(sanitize_filename("Exponential(λ=1)"), "Exponential_λ1");
/// assert_eq!(sanitize_filename("Cauchy"), "Cauchy");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ')' | ',' | '='))
        .map(|c| if c == '(' { '_' } else { c })
        .collect()
}

/// Creates `dir` and its parents; existing directories are left alone.
///
/// # Errors
///
/// Returns [`ReportError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Locations of every generated figure below a results directory.
///
/// ```text
/// <results>/figures/pi_estimation.png
/// <results>/figures/slln_convergence.png
/// <results>/figures/clt_histogram_n<N>.png
/// <results>/figures/clt_qqplot_n<N>.png
/// <results>/slln/slln_<sanitised name>.png
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigurePaths {
    root: PathBuf,
}

impl FigurePaths {
    /// Layout below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Results directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the single-run figures.
    pub fn figures_dir(&self) -> PathBuf {
        self.root.join("figures")
    }

    /// Directory of the per-distribution SLLN figures.
    pub fn slln_dir(&self) -> PathBuf {
        self.root.join("slln")
    }

    /// Directory reserved for CLT artefacts.
    pub fn clt_dir(&self) -> PathBuf {
        self.root.join("clt")
    }

    /// π estimate chart.
    pub fn pi_estimation(&self) -> PathBuf {
        self.figures_dir().join("pi_estimation.png")
    }

    /// Uniform running-mean demonstration.
    pub fn slln_convergence(&self) -> PathBuf {
        self.figures_dir().join("slln_convergence.png")
    }

    /// Histogram for sample size `n`.
    pub fn clt_histogram(&self, n: usize) -> PathBuf {
        self.figures_dir().join(format!("clt_histogram_n{n}.png"))
    }

    /// Q-Q plot for sample size `n`.
    pub fn clt_qqplot(&self, n: usize) -> PathBuf {
        self.figures_dir().join(format!("clt_qqplot_n{n}.png"))
    }

    /// Running-mean chart for the distribution called `name`.
    pub fn slln_distribution(&self, name: &str) -> PathBuf {
        self.slln_dir()
            .join(format!("slln_{}.png", sanitize_filename(name)))
    }

    /// Every directory the toolkit writes into.
    pub fn directories(&self) -> [PathBuf; 4] {
        [
            self.root.clone(),
            self.slln_dir(),
            self.clt_dir(),
            self.figures_dir(),
        ]
    }
}

impl Default for FigurePaths {
    fn default() -> Self {
        Self::new("results")
    }
}
