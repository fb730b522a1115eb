use crate::domain::{HaulError, HaulResult};

/// Format minutes the way the exported tables expect: integral values keep a
/// trailing `.0`, everything else uses the shortest round-trip form. Outside
/// everyday magnitudes this drifts from Python's `repr` (`0.00001` vs `1e-05`,
/// `10000000000000000` vs `1e+16`).
pub fn format_minutes(minutes: f64) -> String {
    if minutes.is_finite() && minutes.fract() == 0.0 && minutes.abs() < 1e16 {
        format!("{minutes:.1}")
    } else {
        minutes.to_string()
    }
}

/// Parse a `NAME=MINUTES` override. The last `=` separates name from value.
pub fn parse_assignment(input: &str) -> HaulResult<(String, f64)> {
    let parse_err = |reason: &str| HaulError::Parse {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (name, value) = input
        .rsplit_once('=')
        .ok_or_else(|| parse_err("expected NAME=MINUTES"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(parse_err("name is empty"));
    }

    let minutes: f64 = value
        .trim()
        .parse()
        .map_err(|_| parse_err("minutes must be a number"))?;

    Ok((name.to_string(), minutes))
}
