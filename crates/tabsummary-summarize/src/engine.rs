use std::fs;
use std::sync::mpsc;
use std::time::Instant;

use tabsummary_core::Dataset;

use crate::errors::SummarizeError;
use crate::model::{ColumnSummary, SummaryOptions};
use crate::summarizer::summarize_column;

/// Summarize every column of a dataset on a fixed-size worker pool.
#[derive(Debug, Clone)]
pub struct SummaryEngine {
    options: SummaryOptions,
}

impl SummaryEngine {
    pub fn new(options: SummaryOptions) -> Self {
        Self { options }
    }

    /// Summaries in column order, one per column.
    ///
    /// Blocks until every column is done. The first failure by column index
    /// fails the whole run.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<ColumnSummary>, SummarizeError> {
        let started = Instant::now();
        fs::create_dir_all(&self.options.tmp_dir)?;

        let columns = dataset.columns();
        let workers = self.options.num_proc.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("tabsummary-worker-{index}"))
            .build()?;

        tracing::info!(
            event = "summary_started",
            table = dataset.name(),
            columns = columns.len(),
            workers
        );

        let options = &self.options;
        let table_name = dataset.name();
        let (sender, receiver) = mpsc::channel();
        pool.scope(|scope| {
            for (index, column) in columns.iter().enumerate() {
                let sender = sender.clone();
                scope.spawn(move |_| {
                    let result = summarize_column(column, index, table_name, options);
                    // the receiver outlives the scope, so sending cannot fail
                    let _ = sender.send((index, result));
                });
            }
        });
        drop(sender);

        let mut slots: Vec<Option<Result<ColumnSummary, SummarizeError>>> =
            (0..columns.len()).map(|_| None).collect();
        for (index, result) in receiver {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(result);
            }
        }

        let summaries = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.unwrap_or(Err(SummarizeError::WorkerLost(index))))
            .collect::<Result<Vec<_>, _>>();

        match &summaries {
            Ok(_) => tracing::info!(
                event = "summary_finished",
                table = table_name,
                elapsed_ms = started.elapsed().as_millis() as u64
            ),
            Err(err) => tracing::error!(
                event = "summary_failed",
                table = table_name,
                error = %err
            ),
        }

        summaries
    }
}
