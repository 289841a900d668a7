use std::collections::HashMap;

use super::StatLines;
use crate::format::{count_with_percent, truncate_chars};

/// A displayed level of a categorical summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Value(String),
    /// Every value beyond the displayed levels.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub level: Level,
    pub count: usize,
}

/// Frequencies of the top levels, with the tail collapsed into `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    pub buckets: Vec<Bucket>,
    /// Number of non-missing values counted.
    pub total: usize,
}

/// Count occurrences, most frequent first. Ties keep first-seen order.
pub fn value_counts<I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match positions.get(&value) {
            Some(&position) => {
                if let Some(entry) = counts.get_mut(position) {
                    entry.1 += 1;
                }
            }
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

impl FrequencyTable {
    pub fn build<I>(values: I, max_level: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let counts = value_counts(values);
        let total = counts.iter().map(|(_, count)| count).sum();

        let mut buckets: Vec<Bucket> = counts
            .iter()
            .take(max_level)
            .map(|(value, count)| Bucket {
                level: Level::Value(value.clone()),
                count: *count,
            })
            .collect();

        if counts.len() > max_level {
            let other = counts.iter().skip(max_level).map(|(_, count)| count).sum();
            buckets.push(Bucket {
                level: Level::Other,
                count: other,
            });
        }

        Self { buckets, total }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Share of each bucket in the total, in display order.
    pub fn shares(&self) -> Vec<f64> {
        self.buckets
            .iter()
            .map(|bucket| {
                if self.total == 0 {
                    0.0
                } else {
                    bucket.count as f64 / self.total as f64
                }
            })
            .collect()
    }

    /// Numbered level labels and `count (pct%)` lines.
    pub fn render(&self, max_str_len: usize) -> StatLines {
        let mut lines = StatLines::default();
        for (index, bucket) in self.buckets.iter().enumerate() {
            let label = match &bucket.level {
                Level::Value(value) => truncate_chars(value, max_str_len),
                Level::Other => "other",
            };
            lines.stats.push(format!("{}. {}", index + 1, label));
            lines.freqs.push(count_with_percent(bucket.count, self.total));
        }
        lines
    }
}
