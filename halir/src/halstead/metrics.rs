use serde::Serialize;

use super::counts::OpCounts;

/// Domain violation while deriving Halstead metrics.
///
/// These are computational, not transient: the input counts put one of
/// the formulas outside its domain, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The unit has no operators and no operands, so `log2(n)` with
    /// `n = 0` is undefined.
    EmptyVocabulary {
        /// Name of the offending unit.
        unit: String,
    },
    /// The unit has no distinct operands, so the difficulty divisor is
    /// zero.
    NoDistinctOperands {
        /// Name of the offending unit.
        unit: String,
        /// Total operand occurrences observed for the unit.
        total_operands: usize,
    },
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVocabulary { unit } => {
                write!(f, "unit '{unit}' has an empty vocabulary (no operators or operands)")
            }
            Self::NoDistinctOperands {
                unit,
                total_operands,
            } => write!(
                f,
                "unit '{unit}' has no distinct operands (total operands: {total_operands})"
            ),
        }
    }
}

impl std::error::Error for MetricsError {}

/// The classical Halstead metric suite for one unit.
///
/// Field names follow the textbook symbols; serde renames preserve the
/// uppercase totals (`N1`, `N2`, `N`) in JSON output. Only
/// [`HalsteadMetrics::from_counts`] constructs this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalsteadMetrics {
    /// n1: number of distinct operators.
    pub n1: usize,
    /// n2: number of distinct operands.
    pub n2: usize,
    /// N1: total number of operators.
    #[serde(rename = "N1")]
    pub total_operators: usize,
    /// N2: total number of operands.
    #[serde(rename = "N2")]
    pub total_operands: usize,
    /// n: program vocabulary (n1 + n2).
    pub vocabulary: usize,
    /// N: program length (N1 + N2).
    #[serde(rename = "N")]
    pub length: usize,
    /// V: volume, N * log2(n).
    pub volume: f64,
    /// D: difficulty, (n1 / 2) * (N2 / n2).
    pub difficulty: f64,
    /// E: effort, D * V.
    pub effort: f64,
    /// T: estimated implementation time in seconds, E / 18.
    pub time: f64,
    /// B: estimated delivered bugs, T / 3000.
    pub bugs: f64,
}

/// Mental discriminations per second (Stroud number).
const TIME_DIVISOR: f64 = 18.0;
/// Empirical bugs-per-effort divisor.
const BUGS_DIVISOR: f64 = 3000.0;

impl HalsteadMetrics {
    /// Derives the metric suite from one unit's counts.
    ///
    /// # Errors
    ///
    /// - [`MetricsError::EmptyVocabulary`] when `n1 + n2 == 0`; an
    ///   all-zero (empty) unit lands here.
    /// - [`MetricsError::NoDistinctOperands`] when `n2 == 0` with a
    ///   non-empty vocabulary.
    ///
    /// A vocabulary of exactly one is valid: `log2(1) = 0`, so the
    /// volume degenerates to zero rather than erroring.
    pub fn from_counts(unit: &str, counts: &OpCounts) -> Result<Self, MetricsError> {
        let n1 = counts.unique_operators;
        let n2 = counts.unique_operands;
        let big_n1 = counts.total_operators;
        let big_n2 = counts.total_operands;

        let vocabulary = n1 + n2;
        if vocabulary == 0 {
            return Err(MetricsError::EmptyVocabulary {
                unit: unit.to_owned(),
            });
        }
        if n2 == 0 {
            return Err(MetricsError::NoDistinctOperands {
                unit: unit.to_owned(),
                total_operands: big_n2,
            });
        }

        let length = big_n1 + big_n2;
        let volume = length as f64 * (vocabulary as f64).log2();
        let difficulty = (n1 as f64 / 2.0) * (big_n2 as f64 / n2 as f64);
        let effort = difficulty * volume;
        let time = effort / TIME_DIVISOR;
        let bugs = time / BUGS_DIVISOR;

        Ok(Self {
            n1,
            n2,
            total_operators: big_n1,
            total_operands: big_n2,
            vocabulary,
            length,
            volume,
            difficulty,
            effort,
            time,
            bugs,
        })
    }
}
