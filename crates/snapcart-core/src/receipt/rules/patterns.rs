//! Common regex patterns for receipt line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Primary item-line shape: a name region (leading letter, then 2-30
    // letters/digits/spaces/hyphens/ampersands/apostrophes), a whitespace or
    // currency-sign boundary, and a trailing price token.
    pub static ref ITEM_LINE: Regex = Regex::new(
        r"^([A-Za-z][A-Za-z0-9\s\-&']{2,30}).*?[\s$]([0-9]+\.?[0-9]*)$"
    ).unwrap();

    // Strict price token for the fallback strategy: exactly two fractional
    // digits, anywhere in the line, optionally preceded by a dollar sign.
    pub static ref PRICE_TOKEN: Regex = Regex::new(
        r"\$?([0-9]+\.[0-9]{2})"
    ).unwrap();

    // Same shape without the capture group, used to strip price tokens when
    // deriving the fallback item name.
    pub static ref PRICE_TOKEN_STRIP: Regex = Regex::new(
        r"\$?[0-9]+\.[0-9]{2}"
    ).unwrap();

    // Runs of 3+ consecutive digits mark transaction ids, barcodes and
    // receipt numbers.
    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"[0-9]{3,}"
    ).unwrap();
}
