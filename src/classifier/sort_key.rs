use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CategoryKey;
use crate::constants::sort_key::{NO_NUMBER_SENTINEL, NUMBER_WIDTH, PRIORITY_WIDTH, SEPARATOR};

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern must compile"));

/// First run of ASCII digits in a name, as a number.
///
/// Runs too long for `u64` count as absent.
pub fn first_number(file_name: &str) -> Option<u64> {
    FIRST_NUMBER
        .find(file_name)
        .and_then(|m| m.as_str().parse().ok())
}

/// Composite key ordering files within a category.
///
/// `PP_NNN_name`: zero-padded priority, zero-padded first embedded number
/// (`999` when absent), then the raw filename as tie-break. The fixed
/// widths make `phase2` sort before `phase10`.
pub fn sort_key(category: CategoryKey, file_name: &str) -> String {
    let number = first_number(file_name).unwrap_or(NO_NUMBER_SENTINEL);
    format!(
        "{:0pw$}{sep}{:0nw$}{sep}{}",
        category.priority(),
        number,
        file_name,
        pw = PRIORITY_WIDTH,
        nw = NUMBER_WIDTH,
        sep = SEPARATOR,
    )
}
