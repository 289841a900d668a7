use std::env;
use std::fs;
use std::path::PathBuf;

use tabsummary_core::ingest::{CsvOptions, read_csv};
use tabsummary_report::df_summary;
use tabsummary_summarize::SummaryOptions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: summarize_csv <input.csv> [output.html]")?;
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("summary.html"));

    let dataset = read_csv(&input, &CsvOptions::default())?;
    let options = SummaryOptions {
        num_proc: 4,
        ..SummaryOptions::default()
    };

    let summary = df_summary(&dataset, &options)?;
    fs::write(&output, summary.to_html())?;
    println!("summary written to {}", output.display());
    Ok(())
}
