//! NBI coordinate conversion
//!
//! The NBI delimited files encode bridge coordinates as packed
//! degrees-minutes-seconds integers: latitude (item 16) as `DDMMSSss` and
//! longitude (item 17) as `DDDMMSSss`, where `ss` is hundredths of a second.
//! Format reference: https://www.fhwa.dot.gov/bridge/mtguide.pdf
//!
//! All NBI longitudes are west of the prime meridian, so the decimal
//! longitude is always negated.

use crate::{Error, Result};

/// Convert a canonical 8-digit `DDMMSSss` value to decimal degrees.
///
/// Rejects anything that is not exactly 8 ASCII digits. The result is
/// `DD + MM/60 + SS.ss/3600`; no range checks are applied beyond the
/// digit/length requirement, matching the source data contract.
pub fn dms_to_decimal(s: &str) -> Result<f64> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "expected 8-digit DMS value, got {:?}",
            s
        )));
    }

    // Unwrap-free: the all-digits check above guarantees these parses succeed,
    // but keep them fallible so a logic slip surfaces as an error.
    let degrees: f64 = s[0..2]
        .parse()
        .map_err(|_| Error::InvalidInput(format!("bad degrees in {:?}", s)))?;
    let minutes: f64 = s[2..4]
        .parse()
        .map_err(|_| Error::InvalidInput(format!("bad minutes in {:?}", s)))?;
    let sec_hundredths: f64 = s[4..8]
        .parse()
        .map_err(|_| Error::InvalidInput(format!("bad seconds in {:?}", s)))?;

    Ok(degrees + minutes / 60.0 + (sec_hundredths / 100.0) / 3600.0)
}

/// Normalize a raw NBI coordinate field to the canonical 8-digit form.
///
/// The longitude field is 9 digits with a leading zero for longitudes under
/// 100 degrees west. Stripping leading zeros reduces those to 8 digits;
/// any other length is malformed.
fn normalize_dms(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "non-numeric coordinate field {:?}",
            raw
        )));
    }

    let stripped = trimmed.trim_start_matches('0');
    if stripped.len() != 8 {
        return Err(Error::InvalidInput(format!(
            "coordinate field {:?} does not reduce to 8 digits",
            raw
        )));
    }
    Ok(stripped)
}

/// Convert the raw NBI LAT_016 / LONG_017 field values to a decimal
/// (lat, lon) pair. Longitude is negated (west).
pub fn nbi_lat_lon(lat_raw: &str, lon_raw: &str) -> Result<(f64, f64)> {
    let lat = dms_to_decimal(normalize_dms(lat_raw)?)?;
    let lon = -dms_to_decimal(normalize_dms(lon_raw)?)?;
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn converts_documented_nbi_example() {
        // FHWA coding guide example: 40 degrees 06 minutes 00.00 seconds
        let v = dms_to_decimal("40060000").unwrap();
        assert!(close(v, 40.1));
    }

    #[test]
    fn converts_seconds_and_hundredths() {
        // 40 deg 06 min 36.00 sec = 40.11
        assert!(close(dms_to_decimal("40063600").unwrap(), 40.11));
        // hundredths contribute 0.25s = 0.25/3600 deg
        assert!(close(
            dms_to_decimal("40060025").unwrap(),
            40.1 + 0.25 / 3600.0
        ));
    }

    #[test]
    fn rejects_malformed_lengths() {
        assert!(dms_to_decimal("4006000").is_err());
        assert!(dms_to_decimal("400600000").is_err());
        assert!(dms_to_decimal("").is_err());
        assert!(dms_to_decimal("4006000x").is_err());
        assert!(dms_to_decimal("-4006000").is_err());
    }

    #[test]
    fn lat_lon_pair_negates_longitude() {
        let (lat, lon) = nbi_lat_lon("40060000", "077300000").unwrap();
        assert!(close(lat, 40.1));
        assert!(close(lon, -77.5));
    }

    #[test]
    fn nine_digit_longitude_keeps_leading_zero_semantics() {
        // "077300000" strips to "77300000": 77 deg 30 min
        let (_, lon) = nbi_lat_lon("40060000", "077300000").unwrap();
        assert!(close(lon, -77.5));
        // A true 100+ degree longitude does not reduce to 8 digits
        assert!(nbi_lat_lon("40060000", "100300000").is_err());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let (lat, _) = nbi_lat_lon(" 40060000 ", "077300000").unwrap();
        assert!(close(lat, 40.1));
    }
}
