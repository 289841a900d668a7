//! Small decoration-free PNG charts.
//!
//! Figures are sized in abstract units (see [`PIXELS_PER_UNIT`]); backgrounds
//! are transparent and there are no axes, ticks or labels.

use std::fs;
use std::path::Path;

use tiny_skia::{Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::errors::SummarizeError;

/// Pixels per figure unit.
pub const PIXELS_PER_UNIT: f32 = 100.0;
/// Width of every figure, in units.
pub const FIGURE_WIDTH: f32 = 2.0;
/// Height of a histogram figure, in units.
pub const HISTOGRAM_HEIGHT: f32 = 1.0;
/// Height of one bar of a bar chart, in units.
pub const BAR_SLOT_HEIGHT: f32 = 0.3;
pub const HISTOGRAM_BINS: usize = 10;

/// Fraction of a slot covered by its bar.
const BAR_FILL: f32 = 0.8;
/// Headroom above the tallest histogram bin.
const HISTOGRAM_MARGIN: f64 = 1.05;

/// Figure size in units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub fn bar_chart(buckets: usize) -> Self {
        Self {
            width: FIGURE_WIDTH,
            height: BAR_SLOT_HEIGHT * buckets as f32,
        }
    }

    pub fn histogram() -> Self {
        Self {
            width: FIGURE_WIDTH,
            height: HISTOGRAM_HEIGHT,
        }
    }

    fn pixels(self) -> (u32, u32) {
        let width = (self.width * PIXELS_PER_UNIT).round().max(1.0) as u32;
        let height = (self.height * PIXELS_PER_UNIT).round().max(1.0) as u32;
        (width, height)
    }
}

/// Draw a horizontal bar per share (each in `[0, 1]`), first share on top,
/// and write the PNG to `path`.
pub fn render_bar_chart(shares: &[f64], path: &Path) -> Result<(), SummarizeError> {
    let mut canvas = Canvas::new(FigureSize::bar_chart(shares.len()))?;
    let slot = canvas.height / shares.len().max(1) as f32;
    let bar_height = slot * BAR_FILL;

    for (index, share) in shares.iter().enumerate() {
        let width = share.clamp(0.0, 1.0) as f32 * canvas.width;
        let top = index as f32 * slot + (slot - bar_height) / 2.0;
        canvas.bar(0.0, top, width, bar_height);
    }

    canvas.save(path)
}

/// Draw a histogram of bin counts and write the PNG to `path`.
pub fn render_histogram(bins: &[usize], path: &Path) -> Result<(), SummarizeError> {
    let mut canvas = Canvas::new(FigureSize::histogram())?;
    let tallest = bins.iter().copied().max().unwrap_or(0);
    let scale = if tallest == 0 {
        0.0
    } else {
        f64::from(canvas.height) / (tallest as f64 * HISTOGRAM_MARGIN)
    };
    let width = canvas.width / bins.len().max(1) as f32;

    for (index, &count) in bins.iter().enumerate() {
        let height = (count as f64 * scale) as f32;
        canvas.bar(index as f32 * width, canvas.height - height, width, height);
    }

    canvas.save(path)
}

/// Count values into `bins` equal-width bins over `[min, max]`.
///
/// The last bin is closed on the right. When every value is equal the range
/// widens to `[value - 0.5, value + 0.5]`.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<usize> {
    let mut counts = vec![0; bins];
    let finite = values.iter().copied().filter(|value| value.is_finite());
    let (mut low, mut high) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if bins == 0 || low > high {
        return counts;
    }
    if low == high {
        low -= 0.5;
        high += 0.5;
    }

    let width = (high - low) / bins as f64;
    for value in values.iter().copied().filter(|value| value.is_finite()) {
        let index = (((value - low) / width).floor() as usize).min(bins - 1);
        if let Some(count) = counts.get_mut(index) {
            *count += 1;
        }
    }
    counts
}

struct Canvas {
    pixmap: Pixmap,
    width: f32,
    height: f32,
}

impl Canvas {
    fn new(size: FigureSize) -> Result<Self, SummarizeError> {
        let (width, height) = size.pixels();
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            SummarizeError::Chart(format!("cannot allocate a {width}x{height} canvas"))
        })?;
        Ok(Self {
            pixmap,
            width: width as f32,
            height: height as f32,
        })
    }

    /// Gray translucent rectangle with a black outline. Degenerate
    /// rectangles are skipped.
    fn bar(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        if rect.width() < 0.5 || rect.height() < 0.5 {
            return;
        }

        let mut fill = Paint::default();
        fill.set_color_rgba8(128, 128, 128, 77);
        self.pixmap
            .fill_rect(rect, &fill, Transform::identity(), None);

        let mut outline = Paint::default();
        outline.set_color_rgba8(0, 0, 0, 255);
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        let path = PathBuilder::from_rect(rect);
        self.pixmap
            .stroke_path(&path, &outline, &stroke, Transform::identity(), None);
    }

    fn save(self, path: &Path) -> Result<(), SummarizeError> {
        let png = self
            .pixmap
            .encode_png()
            .map_err(|err| SummarizeError::Chart(err.to_string()))?;
        fs::write(path, png)?;
        tracing::debug!(event = "chart_written", path = %path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_closed_range() {
        let values: Vec<f64> = (0..=10).map(f64::from).collect();
        let bins = histogram_bins(&values, 10);
        assert_eq!(bins, vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 2]);
    }

    #[test]
    fn constant_values_land_in_middle_bin() {
        let bins = histogram_bins(&[4.0, 4.0, 4.0], 10);
        assert_eq!(bins.iter().sum::<usize>(), 3);
        assert_eq!(bins[5], 3);
    }

    #[test]
    fn empty_values_give_empty_bins() {
        assert_eq!(histogram_bins(&[], 10), vec![0; 10]);
    }

    #[test]
    fn figure_sizes_follow_bucket_count() {
        assert_eq!(FigureSize::bar_chart(3).pixels(), (200, 90));
        assert_eq!(FigureSize::histogram().pixels(), (200, 100));
    }
}
