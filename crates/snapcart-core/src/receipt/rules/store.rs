//! Store-name resolution.

use crate::models::config::ParserConfig;
use crate::models::receipt::UNKNOWN_STORE;

use super::classify::classify;

/// Scan the leading lines for the most likely merchant name.
///
/// The name is almost always printed at the top of the receipt, so only the
/// first few lines are examined. A candidate must be a plausible name length,
/// contain no digits at all (street addresses, phone numbers), and not be a
/// noise line ("RECEIPT" banners, "thank you" footers, payment lines).
/// First qualifying line wins; no scoring.
pub fn resolve_store_name(lines: &[&str], config: &ParserConfig) -> String {
    for line in lines.iter().take(config.store_name_window) {
        let line = line.trim();

        if line.len() > config.store_name_min_len
            && line.len() < config.store_name_max_len
            && !line.chars().any(|c| c.is_ascii_digit())
            && !classify(line, config).is_noise()
        {
            return line.to_string();
        }
    }

    UNKNOWN_STORE.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve(lines: &[&str]) -> String {
        resolve_store_name(lines, &ParserConfig::default())
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        assert_eq!(resolve(&["SuperMart", "Main Street Branch"]), "SuperMart");
    }

    #[test]
    fn test_lines_with_digits_are_skipped() {
        assert_eq!(resolve(&["Store #42", "Corner Shop"]), "Corner Shop");
    }

    #[test]
    fn test_receipt_banner_is_skipped() {
        assert_eq!(resolve(&["RECEIPT COPY", "Corner Shop"]), "Corner Shop");
    }

    #[test]
    fn test_noise_footers_are_never_chosen() {
        assert_eq!(resolve(&["Thank you for shopping", "Corner Shop"]), "Corner Shop");
        assert_eq!(resolve(&["Cash and carry outlet"]), UNKNOWN_STORE);
    }

    #[test]
    fn test_window_is_limited_to_leading_lines() {
        let lines = ["123", "456", "789", "000", "111", "Hidden Mart"];
        assert_eq!(resolve(&lines), UNKNOWN_STORE);
    }

    #[test]
    fn test_length_bounds_are_strict() {
        assert_eq!(resolve(&["Ab", "Abc"]), UNKNOWN_STORE);

        let too_long = "A".repeat(50);
        assert_eq!(resolve(&[too_long.as_str()]), UNKNOWN_STORE);
        assert_eq!(resolve(&["Abcd"]), "Abcd");
    }

    #[test]
    fn test_candidate_is_trimmed() {
        assert_eq!(resolve(&["   SuperMart   "]), "SuperMart");
    }

    #[test]
    fn test_empty_input_yields_sentinel() {
        assert_eq!(resolve(&[]), UNKNOWN_STORE);
    }
}
