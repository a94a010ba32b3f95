//! Result types returned by the conversion entry points.

use serde::Serialize;

/// Rendered HTML plus statistics, returned by [`crate::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The HTML fragment.
    pub html: String,
    pub stats: ConversionStats,
}

/// Size and timing figures for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Bytes of Markdown read.
    pub input_bytes: usize,
    /// Bytes of HTML produced.
    pub output_bytes: usize,
    /// Wall-clock time spent reading, rendering and (for
    /// [`crate::convert_to_file`]) writing.
    pub duration_ms: u64,
}
