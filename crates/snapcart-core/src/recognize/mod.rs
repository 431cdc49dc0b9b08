//! Seam for external text-recognition providers.
//!
//! Recognition itself (Google Vision, Tesseract, an ONNX pipeline, ...) is
//! outside this crate; the parser only ever sees the returned text. A
//! provider either yields the full recognized text for one image or fails
//! with a [`RecognitionError`] — failures never reach the parsing pipeline.

use crate::error::RecognitionError;

/// A provider that turns raw image bytes into recognized text.
pub trait TextRecognizer {
    /// Recognize all text in the image, newline-delimited, one logical
    /// receipt line per physical line.
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError>;
}
