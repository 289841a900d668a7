use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

use crate::errors::SummarizeError;
use crate::model::ChartImage;

/// Read a PNG back from disk and wrap it as an embeddable data URI.
pub fn encode_png_file(path: &Path) -> Result<ChartImage, SummarizeError> {
    let bytes = fs::read(path)?;
    Ok(ChartImage {
        path: path.to_path_buf(),
        data_uri: png_data_uri(&bytes),
    })
}

pub fn png_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64, {}",
        general_purpose::STANDARD.encode(bytes)
    )
}
