//! Turning constant names into human-readable labels.
//!
//! A label is derived from the part of a constant name after its group prefix (the "stem"):
//!
//! 1. `-`, `_` and `.` become spaces
//! 2. a space goes in front of every uppercase letter that does not follow an uppercase letter or
//!    ASCII whitespace, splitting camelCase
//! 3. a stem made only of uppercase letters and ASCII whitespace is title-cased
//! 4. surrounding ASCII whitespace is trimmed
//!
//! Mixed-case stems keep their casing, so `COM_plex_LAbeL` becomes `COM plex LAbe L`.
//!
//! ```rust
//! use constlabel::labels::format_label;
//!
//! assert_eq!(format_label("STATUS_", "STATUS_TWO_WORDS"), "Two Words");
//! assert_eq!(format_label("STATUS_", "STATUS_inReview"), "in Review");
//! ```

use crate::metadata::{ConstSymbol, LabelMap};

/// Derive the labels of a group
///
/// Every symbol contributes one entry keyed by its value. When two symbols share a value, the one
/// declared later wins.
///
/// ## Arguments
/// * `prefix`  - The group prefix shared by all symbols, e.g. `STATUS_`
/// * `symbols` - The group's symbols, in declaration order
#[must_use]
pub fn format_labels(prefix: &str, symbols: &[ConstSymbol]) -> LabelMap {
    symbols
        .iter()
        .map(|symbol| (symbol.value.clone(), format_label(prefix, &symbol.name)))
        .collect()
}

/// Derive the label of a single constant name
///
/// ## Arguments
/// * `prefix` - The group prefix to strip from `name`
/// * `name`   - The constant's symbolic name
#[must_use]
pub fn format_label(prefix: &str, name: &str) -> String {
    let stem = name.strip_prefix(prefix).unwrap_or(name);

    let mut label = String::with_capacity(stem.len() + 4);
    let mut previous: Option<char> = None;
    for c in stem.chars() {
        let c = if matches!(c, '-' | '_' | '.') { ' ' } else { c };

        if c.is_ascii_uppercase()
            && !previous.is_some_and(|p| p.is_ascii_uppercase() || p.is_ascii_whitespace())
        {
            label.push(' ');
        }

        label.push(c);
        previous = Some(c);
    }

    if label
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_whitespace())
    {
        label = title_case(&label);
    }

    label
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

/// Lower-case everything, then upper-case the first letter of every word
fn title_case(shouting: &str) -> String {
    let mut title = String::with_capacity(shouting.len());
    let mut word_start = true;
    for c in shouting.chars() {
        if word_start {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c.to_ascii_lowercase());
        }
        word_start = c.is_ascii_whitespace();
    }

    title
}
