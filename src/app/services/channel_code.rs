//! Channel code inference for station listing lines
//!
//! Station listings carry their channel information as free text anywhere on
//! the line. A channel token is three characters: a band code, an instrument
//! code and an orientation code, standing alone between word boundaries.
//!
//! The first (leftmost) token on the line wins and is standardized to its
//! vertical component: `BHN` on a line yields `BHZ`. All orientations of one
//! instrument share the station's location metadata, so the registry keeps a
//! single vertical entry per station. A line naming several instruments still
//! yields only the first one.

use crate::app::models::ChannelCode;
use crate::constants::channel_grammar::{
    BAND_CODES, INSTRUMENT_CODES, ORIENTATION_CODES, STANDARD_ORIENTATION, TOKEN_LENGTH,
};

/// Find the first channel token on `line` and standardize it to `XYZ`
///
/// Returns `None` when the line holds no token matching the grammar.
pub fn infer_channel_code(line: &str) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < TOKEN_LENGTH {
        return None;
    }

    (0..=chars.len() - TOKEN_LENGTH)
        .find(|&start| is_channel_token_at(&chars, start))
        .map(|start| {
            let mut code: String = chars[start..start + 2].iter().collect();
            code.push(STANDARD_ORIENTATION);
            code
        })
}

/// Infer the channel code of `line`, falling back to the `CHECK` sentinel
pub fn channel_code_for_line(line: &str) -> ChannelCode {
    ChannelCode::from(infer_channel_code(line))
}

/// Whether a standalone channel token starts at `start`
fn is_channel_token_at(chars: &[char], start: usize) -> bool {
    let end = start + TOKEN_LENGTH;

    let matches_grammar = BAND_CODES.contains(&chars[start])
        && INSTRUMENT_CODES.contains(&chars[start + 1])
        && ORIENTATION_CODES.contains(&chars[start + 2]);
    if !matches_grammar {
        return false;
    }

    let bounded_left = start == 0 || !is_word_char(chars[start - 1]);
    let bounded_right = end == chars.len() || !is_word_char(chars[end]);

    bounded_left && bounded_right
}

/// Word characters for token boundaries: alphanumerics and underscore
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
