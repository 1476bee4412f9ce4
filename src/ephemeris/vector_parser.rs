use std::sync::LazyLock;

use regex::Regex;

use crate::aeon_errors::AeonError;
use crate::ephemeris::position::HeliocentricPosition;

/// Number of lines scanned for the three vector fields, starting at the given index.
/// One Horizons vector record spans at most a handful of lines; ten is enough headroom.
pub const PARSE_WINDOW_LINES: usize = 10;

/// Signed floating-point number, optional decimal part, optional exponent.
const FLOAT_PATTERN: &str = r"([-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)";

static X_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("X"));
static Y_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Y"));
static Z_FIELD: LazyLock<Regex> = LazyLock::new(|| field_regex("Z"));

fn field_regex(axis: &str) -> Regex {
    // Word boundary keeps `X =` from matching inside velocity labels like `VX =`.
    Regex::new(&format!(r"\b{axis}\s*=\s*{FLOAT_PATTERN}"))
        .expect("vector field regex is not valid")
}

fn scan_field(window: &[&str], field: &Regex) -> Option<f64> {
    window
        .iter()
        .find_map(|line| field.captures(line))
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse::<f64>().ok())
}

/// Extract a single position vector from a line-oriented ephemeris record.
///
/// Scans at most [`PARSE_WINDOW_LINES`] lines beginning at `start` and locates the
/// three labeled fields `X =`, `Y =`, `Z =`, each followed by a signed float
/// (scientific notation allowed). The fields may share one line or be spread
/// over several.
///
/// Argument
/// --------
/// * `lines`: the response body split on line breaks
/// * `start`: index of the first line of the record (the line after `$$SOE`)
///
/// Return
/// ------
/// * the parsed [`HeliocentricPosition`], or [`AeonError::MissingVectorField`]
///   naming the first absent field
pub fn parse_position_record(
    lines: &[&str],
    start: usize,
) -> Result<HeliocentricPosition, AeonError> {
    let end = lines.len().min(start.saturating_add(PARSE_WINDOW_LINES));
    let window = lines.get(start..end).unwrap_or(&[]);

    let x = scan_field(window, &X_FIELD).ok_or(AeonError::MissingVectorField("X ="))?;
    let y = scan_field(window, &Y_FIELD).ok_or(AeonError::MissingVectorField("Y ="))?;
    let z = scan_field(window, &Z_FIELD).ok_or(AeonError::MissingVectorField("Z ="))?;

    Ok(HeliocentricPosition::new(x, y, z))
}
