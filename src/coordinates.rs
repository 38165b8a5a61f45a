//! Conversion of textual coordinate markup into signed decimal degrees.

use crate::error::{GeospotError, Result};

/// Glyphs separating the parts of a DMS coordinate, e.g. `40° 7′ 23″ N`
const DMS_GLYPHS: [char; 3] = ['°', '′', '″'];

/// Convert a degrees/minutes/seconds coordinate with a compass orientation
/// into signed decimal degrees.
///
/// Accepts the four-token form `degrees minutes seconds orientation` and the
/// three-token form `degrees minutes orientation`. Orientation `S` or `W`
/// negates the value, `N` or `E` keeps it positive, anything else is a parse
/// error.
pub fn dms_to_decimal(text: &str) -> Result<f64> {
    let cleaned = text.replace(DMS_GLYPHS, " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    match tokens.as_slice() {
        [degrees, minutes, seconds, orientation] => {
            let magnitude = parse_degrees(degrees)?
                + parse_subdivision(minutes)? / 60.0
                + parse_subdivision(seconds)? / 3600.0;
            apply_orientation(magnitude, orientation, text)
        }
        [degrees, minutes, orientation] => {
            let magnitude = parse_degrees(degrees)? + parse_subdivision(minutes)? / 60.0;
            apply_orientation(magnitude, orientation, text)
        }
        _ => Err(GeospotError::parse(format!(
            "'{text}' is not a valid geographic coordinate"
        ))),
    }
}

/// Parse a plain decimal degree value, as used by the de and fr editions.
pub fn parse_decimal_degrees(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| {
        GeospotError::parse(format!("'{trimmed}' is not a valid decimal degree value"))
    })
}

/// The degree token carries magnitude only; the sign comes from the
/// orientation token.
fn parse_degrees(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map(f64::abs)
        .map_err(|_| GeospotError::parse(format!("'{token}' is not a valid degree value")))
}

fn parse_subdivision(token: &str) -> Result<f64> {
    let value = token
        .parse::<f64>()
        .map_err(|_| GeospotError::parse(format!("'{token}' is not a valid minute or second value")))?;
    if value < 0.0 {
        return Err(GeospotError::parse(format!(
            "minute and second values cannot be negative, got '{token}'"
        )));
    }
    Ok(value)
}

fn apply_orientation(magnitude: f64, orientation: &str, original: &str) -> Result<f64> {
    match orientation {
        "N" | "E" => Ok(magnitude),
        "S" | "W" => Ok(-magnitude),
        other => Err(GeospotError::parse(format!(
            "unknown compass orientation '{other}' in '{original}'"
        ))),
    }
}
