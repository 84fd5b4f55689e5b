use crate::evaluation::{ReductionRatios, RunResult, SplitResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Flat per-split section of a run report.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub accuracy: f64,
    pub kappa: f64,
    pub mean_absolute_error: f64,
    pub unclassified: u64,
    pub split_size: usize,
    pub monotonicity_index: f64,
    pub prediction_seconds: f64,
}

impl SplitReport {
    fn from_split(split: &SplitResult) -> SplitReport {
        SplitReport {
            accuracy: split.statistics.accuracy,
            kappa: split.statistics.kappa,
            mean_absolute_error: split.statistics.mean_absolute_error,
            unclassified: split.statistics.unclassified,
            split_size: split.statistics.split_size,
            monotonicity_index: split.monotonicity_index,
            prediction_seconds: split.prediction_time.as_secs_f64(),
        }
    }
}

/// Structured record handed to the report sink after a run: every statistic
/// from the evaluation plus the classifier's own rule summary.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub relation_name: String,
    pub generated_at: DateTime<Utc>,
    pub model_seconds: f64,
    pub train: SplitReport,
    pub test: SplitReport,
    pub rule_count: usize,
    pub rules: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduction: Option<ReductionRatios>,
}

impl RunReport {
    pub fn from_result(
        relation_name: &str,
        result: &RunResult,
        reduction: Option<ReductionRatios>,
    ) -> RunReport {
        RunReport {
            relation_name: relation_name.to_string(),
            generated_at: Utc::now(),
            model_seconds: result.model_time.as_secs_f64(),
            train: SplitReport::from_split(&result.train),
            test: SplitReport::from_split(&result.test),
            rule_count: result.model.rule_count,
            rules: result.model.text.clone(),
            reduction,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the flat textual rendition to any sink.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{self}")
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "relation={}, generated_at={}, model_t={:.3}s",
            self.relation_name,
            self.generated_at.to_rfc3339(),
            self.model_seconds
        )?;
        for (name, split) in [("train", &self.train), ("test", &self.test)] {
            writeln!(
                f,
                "{name}: acc={:.6}, kappa={:.6}, mae={:.6}, unclassified={}/{}, mono={:.6}, t={:.3}s",
                split.accuracy,
                split.kappa,
                split.mean_absolute_error,
                split.unclassified,
                split.split_size,
                split.monotonicity_index,
                split.prediction_seconds
            )?;
        }
        if let Some(reduction) = &self.reduction {
            writeln!(
                f,
                "reduction: instances={:.6}, features={:.6}, combined={:.6}",
                reduction.instances, reduction.features, reduction.combined
            )?;
        }
        write!(f, "rules({}): {}", self.rule_count, self.rules)
    }
}
