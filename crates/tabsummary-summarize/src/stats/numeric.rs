use super::{StatLines, distinct_values};
use crate::format::{one_decimal, one_decimal_or_undefined};

/// Descriptive statistics of the non-missing values of a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub sd: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub distinct: usize,
}

impl NumericSummary {
    /// `None` when there are no values.
    pub fn from_values(values: &[f64], distinct: usize) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let (&min, &max) = (sorted.first()?, sorted.last()?);

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let sd = (sorted.len() > 1).then(|| {
            let squares: f64 = sorted.iter().map(|value| (value - mean).powi(2)).sum();
            (squares / (n - 1.0)).sqrt()
        });

        Some(Self {
            mean,
            sd,
            min,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max,
            distinct,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Coefficient of variation; undefined for a zero mean.
    pub fn cv(&self) -> Option<f64> {
        let sd = self.sd?;
        if self.mean == 0.0 {
            return None;
        }
        Some(sd / self.mean)
    }

    pub fn render(&self) -> StatLines {
        StatLines {
            stats: vec![
                format!(
                    "Mean (sd) : {} ({})",
                    one_decimal(self.mean),
                    one_decimal_or_undefined(self.sd)
                ),
                "min < med < max:".to_string(),
                format!(
                    "{} < {} < {}",
                    one_decimal(self.min),
                    one_decimal(self.median),
                    one_decimal(self.max)
                ),
                format!(
                    "IQR (CV) : {} ({})",
                    one_decimal(self.iqr()),
                    one_decimal_or_undefined(self.cv())
                ),
            ],
            freqs: vec![distinct_values(self.distinct)],
        }
    }
}

/// Quantile of sorted, non-empty data with linear interpolation between
/// the closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return f64::NAN;
    };
    let position = q.clamp(0.0, 1.0) * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    match (sorted.get(lower), sorted.get(upper)) {
        (Some(&low), Some(&high)) => low + (high - low) * (position - lower as f64),
        _ => f64::NAN,
    }
}
