//! Fixed-width text tables.
//!
//! Every function returns the complete block, trailing newline included,
//! so callers can `print!` it or write it elsewhere.

use std::fmt::Write;

use limit_core::math::cumulative::VOLATILITY_WINDOW;
use limit_core::types::Moment;
use limit_models::{DistributionSpec, Registry, Theorem};
use limit_sim::clt::CltReport;
use limit_sim::pi::PiEstimate;
use limit_sim::slln::SllnAnalysis;
use limit_sim::{ConvergenceResult, Verdict};

/// Width of separators.
pub const RULE_WIDTH: usize = 80;

/// Width of the distribution name column.
pub const NAME_WIDTH: usize = 25;

fn rule(c: char) -> String {
    std::iter::repeat(c).take(RULE_WIDTH).collect()
}

fn tick(applies: bool) -> &'static str {
    if applies {
        "✓"
    } else {
        "✗"
    }
}

/// Why `theorem` does not apply to `spec`; empty when it does.
pub fn failure_reason(spec: &DistributionSpec, theorem: Theorem) -> &'static str {
    if spec.applies(theorem) {
        return "";
    }
    match (spec.mean, spec.variance) {
        (Moment::Undefined, _) => "mean undefined",
        (Moment::Infinite, _) => "infinite mean",
        (_, Moment::Infinite) => "infinite variance",
        (_, Moment::Undefined) => "variance undefined",
        _ => "",
    }
}

/// Moments and theorem applicability of every registry entry.
///
/// Finite moments print with four decimals; the special states print as
/// `INFINITE` or `UNDEFINED`.
pub fn moment_table(registry: &Registry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "MOMENT TABLE");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:<15} {:<15} {:<6} {}",
        "Distribution", "E[X]", "Var(X)", "SLLN", "CLT"
    );
    let _ = writeln!(out, "{}", rule('-'));
    for spec in registry {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:<15} {:<15} {:<6} {}",
            spec.name,
            format!("{:.4}", spec.mean),
            format!("{:.4}", spec.variance),
            tick(spec.slln_applies),
            tick(spec.clt_applies),
        );
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// Requirements of each theorem and the entries it covers.
pub fn theoretical_implications(registry: &Registry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTHEORETICAL IMPLICATIONS:");
    let _ = writeln!(out, "{}", rule('-'));
    for (i, theorem) in [Theorem::Slln, Theorem::Clt].into_iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let works: Vec<&str> = registry
            .iter()
            .filter(|s| s.applies(theorem))
            .map(|s| s.name)
            .collect();
        let fails: Vec<String> = registry
            .iter()
            .filter(|s| !s.applies(theorem))
            .map(|s| format!("{} ({})", s.name, failure_reason(s, theorem)))
            .collect();

        let _ = writeln!(out, "{} Requirements: {}", theorem, theorem.requirement());
        let _ = writeln!(out, "  ✓ Works for: {}", join_or_none(&works));
        let _ = writeln!(out, "  ✗ Fails for: {}", join_or_none(&fails));
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// First `count` draws of each entry, every generator seeded with `seed`.
pub fn preview_table(registry: &Registry, count: usize, seed: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nTesting generators (generating {count} samples from each):"
    );
    let _ = writeln!(out, "{}", rule('-'));
    for spec in registry {
        let values: Vec<String> = spec
            .preview(count, seed)
            .iter()
            .map(|v| format!("{v:.8}"))
            .collect();
        let _ = writeln!(out, "{}: [{}]", spec.name, values.join(" "));
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// Detailed block for one SLLN analysis.
pub fn analysis_block(analysis: &SllnAnalysis) -> String {
    let spec = &analysis.spec;
    let result = &analysis.result;
    let window = result.len().min(VOLATILITY_WINDOW);

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('─'));
    let _ = writeln!(out, "Analyzing: {}", spec.name);
    let _ = writeln!(out, "{}", rule('─'));
    let _ = writeln!(out, "PDF: {}", spec.pdf);
    let _ = writeln!(out, "E[X]: {}", spec.mean);
    let _ = writeln!(out, "Var(X): {}", spec.variance);
    let _ = writeln!(
        out,
        "Expected SLLN behavior: {}",
        if spec.slln_applies { "Works" } else { "Does NOT work" }
    );

    match (result.true_value, result.absolute_error) {
        (Some(mu), Some(error)) => {
            let _ = writeln!(out, "\n✓ Analysis complete");
            let _ = writeln!(out, "  Final sample mean: {:.6}", result.final_value);
            let _ = writeln!(out, "  True mean: {mu:.6}");
            let _ = writeln!(out, "  Final error: {error:.6}");
            let _ = writeln!(out, "  Volatility (last {window}): {:.6}", result.volatility);
            if result.is_stable() {
                let _ = writeln!(out, "  ✓ CONVERGED - Low volatility indicates stable convergence");
            } else {
                let _ = writeln!(out, "  ~ Slow convergence - Higher volatility observed");
            }
        }
        _ => {
            let _ = writeln!(out, "\n✗ Mean is {}", spec.mean);
            let _ = writeln!(
                out,
                "  Sample mean at n={}: {:.6}",
                result.len(),
                result.final_value
            );
            let _ = writeln!(out, "  ⚠ SLLN DOES NOT APPLY - No convergence expected");
            let _ = writeln!(out, "  Volatility (last {window}): {:.6}", result.volatility);
            let _ = writeln!(out, "  Notice: High volatility - cumulative mean keeps fluctuating");
        }
    }
    out
}

/// Final comparison of every SLLN analysis.
pub fn slln_summary(analyses: &[SllnAnalysis]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "SUMMARY: SLLN CONVERGENCE");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:<12} {:<12} {:<12} {}",
        "Distribution", "True Mean", "Final Mean", "Error", "Status"
    );
    let _ = writeln!(out, "{}", rule('-'));
    for analysis in analyses {
        let result = &analysis.result;
        let status = result.verdict().label();
        match (result.true_value, result.absolute_error) {
            (Some(mu), Some(error)) => {
                let _ = writeln!(
                    out,
                    "{:<NAME_WIDTH$} {:<12.6} {:<12.6} {:<12.6} {}",
                    analysis.spec.name, mu, result.final_value, error, status
                );
            }
            _ => {
                let _ = writeln!(
                    out,
                    "{:<NAME_WIDTH$} {:<12} {:<12.6} {:<12} {}",
                    analysis.spec.name,
                    analysis.spec.mean.to_string(),
                    result.final_value,
                    "N/A",
                    status
                );
            }
        }
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// Short report of a single running mean.
pub fn running_mean_summary(result: &ConvergenceResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Samples: {}", result.len());
    let _ = writeln!(out, "Final mean: {:.6}", result.final_value);
    if let (Some(mu), Some(error)) = (result.true_value, result.absolute_error) {
        let _ = writeln!(out, "True mean: {mu:.6}");
        let _ = writeln!(out, "Absolute error: {error:.6}");
    }
    if let Some(index) = result.convergence_index {
        let _ = writeln!(out, "{}", convergence_line(result, index));
    }
    out
}

fn convergence_line(result: &ConvergenceResult, index: usize) -> String {
    if index < result.len() {
        format!("Converged (±{}) at n ≈ {}", result.tolerance, index)
    } else {
        format!("Never within ±{} of the target", result.tolerance)
    }
}

/// Z-score moments and Q-Q fit per sample size.
pub fn clt_summary(report: &CltReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "CLT SUMMARY - {}", report.distribution);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:<8} {:<12} {:<12} {}", "n", "Mean(Z)", "Var(Z)", "Q-Q R²");
    let _ = writeln!(out, "{}", rule('-'));
    for trial in &report.trials {
        let _ = writeln!(
            out,
            "{:<8} {:<12.4} {:<12.4} {:.4}",
            trial.sample_size,
            trial.z_mean,
            trial.z_variance,
            trial.qq.r_squared()
        );
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// Final π estimate and its error.
pub fn pi_summary(estimate: &PiEstimate) -> String {
    let result = &estimate.result;
    let mut out = String::new();
    let _ = writeln!(out, "Monte Carlo π estimate (n = {})", result.len());
    let _ = writeln!(out, "  Points inside: {}", estimate.inside);
    let _ = writeln!(out, "  Final estimate: {:.6}", result.final_value);
    let _ = writeln!(out, "  True π: {:.6}", std::f64::consts::PI);
    if let Some(error) = result.absolute_error {
        let _ = writeln!(out, "  Absolute error: {error:.6}");
    }
    if let Some(index) = result.convergence_index {
        let _ = writeln!(out, "  {}", convergence_line(result, index));
    }
    let _ = writeln!(out, "  Status: {}", match result.verdict() {
        Verdict::Converged => "within tolerance",
        Verdict::Slow => "outside tolerance",
        Verdict::NoConvergence => "no target",
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use limit_models::DistributionKind;
    use limit_sim::slln::{SllnConfig, SllnSimulator};

    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    #[test]
    fn test_moment_table_cells() {
        let table = moment_table(&registry());
        let uniform = table.lines().find(|l| l.starts_with("Uniform(0,1)")).unwrap();
        assert!(uniform.contains("0.5000"));
        assert!(uniform.contains("0.0833"));

        let pareto = table.lines().find(|l| l.starts_with("Pareto(α=1.5")).unwrap();
        assert!(pareto.contains("3.0000"));
        assert!(pareto.contains("INFINITE"));

        let cauchy = table.lines().find(|l| l.starts_with("Cauchy")).unwrap();
        assert_eq!(cauchy.matches("UNDEFINED").count(), 2);
    }

    #[test]
    fn test_name_column_width() {
        let table = moment_table(&registry());
        let row = table.lines().find(|l| l.starts_with("Cauchy")).unwrap();
        let prefix: String = row.chars().take(NAME_WIDTH + 1).collect();
        assert_eq!(prefix.trim_end(), "Cauchy");
        assert_eq!(prefix.chars().count(), NAME_WIDTH + 1);
    }

    #[test]
    fn test_implications_lists() {
        let text = theoretical_implications(&registry());
        assert!(text.contains("SLLN Requirements: E[X] < ∞"));
        assert!(text.contains("✗ Fails for: Cauchy (mean undefined)"));
        assert!(text.contains(
            "✗ Fails for: Pareto(α=1.5, xₘ=1) (infinite variance), Cauchy (mean undefined)"
        ));
        assert!(text.contains(
            "✓ Works for: Uniform(0,1), Exponential(λ=1), Pareto(α=3, xₘ=1)\n"
        ));
    }

    #[test]
    fn test_implications_empty_lists() {
        let only_uniform = Registry::from_kinds(&[DistributionKind::Uniform]).unwrap();
        let text = theoretical_implications(&only_uniform);
        assert_eq!(text.matches("✗ Fails for: none").count(), 2);
    }

    #[test]
    fn test_preview_table() {
        let text = preview_table(&registry(), 5, 42);
        let line = text.lines().find(|l| l.starts_with("Uniform(0,1): [")).unwrap();
        assert_eq!(line.split_whitespace().count(), 6);
        assert_eq!(text, preview_table(&registry(), 5, 42));
    }

    #[test]
    fn test_summary_statuses() {
        let sim = SllnSimulator::new(SllnConfig::builder().n_samples(2_000).build().unwrap());
        let analyses = sim.analyse_all(&registry());
        let summary = slln_summary(&analyses);

        let cauchy = summary.lines().find(|l| l.starts_with("Cauchy")).unwrap();
        assert!(cauchy.contains("UNDEFINED"));
        assert!(cauchy.contains("N/A"));
        assert!(cauchy.ends_with("✗ No convergence"));

        for analysis in analyses.iter().filter(|a| a.spec.mean.is_finite()) {
            let row = summary
                .lines()
                .find(|l| l.starts_with(analysis.spec.name))
                .unwrap();
            assert!(row.ends_with(analysis.result.verdict().label()));
        }
    }

    #[test]
    fn test_analysis_block_undefined_mean() {
        let sim = SllnSimulator::new(SllnConfig::builder().n_samples(500).build().unwrap());
        let registry = registry();
        let block = analysis_block(&sim.analyse(registry.get(DistributionKind::Cauchy).unwrap()));

        assert!(block.contains("Analyzing: Cauchy"));
        assert!(block.contains("✗ Mean is UNDEFINED"));
        assert!(block.contains("Volatility (last 500)"));
        assert!(block.contains("Expected SLLN behavior: Does NOT work"));
    }

    #[test]
    fn test_analysis_block_defined_mean() {
        let sim = SllnSimulator::default();
        let registry = registry();
        let block = analysis_block(&sim.analyse(registry.get(DistributionKind::Uniform).unwrap()));

        assert!(block.contains("PDF: f(x) = 1, 0 ≤ x ≤ 1"));
        assert!(block.contains("True mean: 0.500000"));
        assert!(block.contains("Volatility (last 1000)"));
        assert!(block.contains("CONVERGED") || block.contains("Slow convergence"));
    }

    #[test]
    fn test_running_mean_summary_never_converged() {
        let result = ConvergenceResult::from_series(vec![1.0; 5], Moment::Finite(0.0), 0.01);
        let text = running_mean_summary(&result);
        assert!(text.contains("Never within ±0.01 of the target"));
    }
}
