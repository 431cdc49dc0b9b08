//! Line classification: content lines vs. header/footer/metadata noise.

use crate::models::config::ParserConfig;

use super::patterns::DIGIT_RUN;

/// Why a line was classified as noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseReason {
    /// Contains "total".
    Total,
    /// Contains "subtotal" (only reachable if "total" did not match first,
    /// so in practice subtotal lines report [`NoiseReason::Total`]).
    Subtotal,
    /// Contains "tax".
    Tax,
    /// Contains "change".
    Change,
    /// Contains "cash" or "card".
    PaymentMethod,
    /// Contains "receipt" or "thank" (header/footer boilerplate).
    Boilerplate,
    /// Trimmed line is shorter than the configured minimum.
    TooShort,
    /// Contains a run of 3+ consecutive digits (transaction id, barcode).
    NumericId,
}

/// Role of a single receipt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Candidate item line.
    Content,
    /// Metadata, never an item or a store name.
    Noise(NoiseReason),
}

impl LineRole {
    pub fn is_noise(&self) -> bool {
        matches!(self, LineRole::Noise(_))
    }
}

// Keyword scan order; first match wins.
const NOISE_KEYWORDS: [(&str, NoiseReason); 8] = [
    ("total", NoiseReason::Total),
    ("subtotal", NoiseReason::Subtotal),
    ("tax", NoiseReason::Tax),
    ("change", NoiseReason::Change),
    ("cash", NoiseReason::PaymentMethod),
    ("card", NoiseReason::PaymentMethod),
    ("receipt", NoiseReason::Boilerplate),
    ("thank", NoiseReason::Boilerplate),
];

/// Classify one line of recognized text.
///
/// The three triggers (too short, noise keyword, digit run) are independent;
/// any one of them marks the line as noise. They are checked in that order,
/// so the reported reason is the first trigger that fired.
pub fn classify(line: &str, config: &ParserConfig) -> LineRole {
    let trimmed = line.trim();

    if trimmed.len() < config.min_line_len {
        return LineRole::Noise(NoiseReason::TooShort);
    }

    let lowered = trimmed.to_lowercase();
    for (keyword, reason) in NOISE_KEYWORDS {
        if lowered.contains(keyword) {
            return LineRole::Noise(reason);
        }
    }

    if DIGIT_RUN.is_match(trimmed) {
        return LineRole::Noise(NoiseReason::NumericId);
    }

    LineRole::Content
}
