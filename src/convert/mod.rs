// Pure px <-> rem conversions and display formatting

/// Fractional digits used by the converter inputs.
pub const DEFAULT_DECIMALS: usize = 3;

/// Fractional digits used by the conversion tables.
pub const TABLE_DECIMALS: usize = 2;

// Rounds to `decimals` fractional digits, then strips trailing zeros
// and a trailing decimal point. `None` renders as an empty field.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

// Zero pixels renders as an empty field, same as no input at all.
// Matches the shipped behavior of the web version; revisit if true
// zero-length conversions ever matter.
pub fn is_empty_quantity(pixels: f64) -> bool {
    pixels == 0.0
}

// Converts pixels to rem against the given root font size
pub fn px_to_rem(root_font_size: f64, pixels: Option<f64>, decimals: usize) -> String {
    match pixels {
        Some(px) if !is_empty_quantity(px) => format_number(Some(px / root_font_size), decimals),
        _ => String::new(),
    }
}

// Converts rem to pixels. No empty-quantity guard here: zero rem
// renders as "0".
pub fn rem_to_px(root_font_size: f64, rem: f64, decimals: usize) -> String {
    format_number(Some(rem * root_font_size), decimals)
}

// Parses user-typed text into a quantity. Empty, non-numeric, and
// non-finite input all count as "no value", so NaN never reaches the
// conversion functions.
pub fn parse_quantity(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
