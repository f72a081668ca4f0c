//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Renders a 0-5 rating as filled and hollow stars.
///
/// Usage in templates: `{{ product.rating|stars }}`
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(star_row(
        rating.to_string().parse::<usize>().unwrap_or(0),
    ))
}

fn star_row(filled: usize) -> String {
    let filled = filled.min(5);
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[cfg(test)]
mod tests {
    use super::star_row;

    #[test]
    fn test_star_row_clamps_to_five() {
        assert_eq!(star_row(4), "★★★★☆");
        assert_eq!(star_row(9), "★★★★★");
        assert_eq!(star_row(0), "☆☆☆☆☆");
    }
}
