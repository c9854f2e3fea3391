//! State reference data
//!
//! Static table of the 50 US states: postal abbreviation, full name, ANSI
//! FIPS state code (the code the NBI files use in item 1), and a
//! representative centroid the map client flies to when a state is
//! selected. Centroid source: https://www.latlong.net/category/states-236-14.html

use serde::Serialize;

/// One state's reference data.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateInfo {
    pub abbreviation: &'static str,
    pub name: &'static str,
    /// Two-digit ANSI FIPS state code, zero-padded.
    pub fips: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// All 50 states, ordered by FIPS code.
pub const STATES: &[StateInfo] = &[
    StateInfo { abbreviation: "AL", name: "Alabama", fips: "01", lat: 32.31823, lon: -86.902298 },
    StateInfo { abbreviation: "AK", name: "Alaska", fips: "02", lat: 66.160507, lon: -153.369141 },
    StateInfo { abbreviation: "AZ", name: "Arizona", fips: "04", lat: 34.048927, lon: -111.093735 },
    StateInfo { abbreviation: "AR", name: "Arkansas", fips: "05", lat: 34.799999, lon: -92.199997 },
    StateInfo { abbreviation: "CA", name: "California", fips: "06", lat: 36.778259, lon: -119.417931 },
    StateInfo { abbreviation: "CO", name: "Colorado", fips: "08", lat: 39.113014, lon: -105.358887 },
    StateInfo { abbreviation: "CT", name: "Connecticut", fips: "09", lat: 41.599998, lon: -72.699997 },
    StateInfo { abbreviation: "DE", name: "Delaware", fips: "10", lat: 39.0, lon: -75.5 },
    StateInfo { abbreviation: "FL", name: "Florida", fips: "12", lat: 27.994402, lon: -81.760254 },
    StateInfo { abbreviation: "GA", name: "Georgia", fips: "13", lat: 33.247875, lon: -83.441162 },
    StateInfo { abbreviation: "HI", name: "Hawaii", fips: "15", lat: 19.741755, lon: -155.844437 },
    StateInfo { abbreviation: "ID", name: "Idaho", fips: "16", lat: 44.068203, lon: -114.742043 },
    StateInfo { abbreviation: "IL", name: "Illinois", fips: "17", lat: 40.0, lon: -89.0 },
    StateInfo { abbreviation: "IN", name: "Indiana", fips: "18", lat: 40.273502, lon: -86.126976 },
    StateInfo { abbreviation: "IA", name: "Iowa", fips: "19", lat: 42.032974, lon: -93.581543 },
    StateInfo { abbreviation: "KS", name: "Kansas", fips: "20", lat: 38.5, lon: -98.0 },
    StateInfo { abbreviation: "KY", name: "Kentucky", fips: "21", lat: 37.839333, lon: -84.27002 },
    StateInfo { abbreviation: "LA", name: "Louisiana", fips: "22", lat: 30.39183, lon: -92.329102 },
    StateInfo { abbreviation: "ME", name: "Maine", fips: "23", lat: 45.367584, lon: -68.972168 },
    StateInfo { abbreviation: "MD", name: "Maryland", fips: "24", lat: 39.045753, lon: -76.641273 },
    StateInfo { abbreviation: "MA", name: "Massachusetts", fips: "25", lat: 42.407211, lon: -71.382439 },
    StateInfo { abbreviation: "MI", name: "Michigan", fips: "26", lat: 44.182205, lon: -84.506836 },
    StateInfo { abbreviation: "MN", name: "Minnesota", fips: "27", lat: 46.39241, lon: -94.63623 },
    StateInfo { abbreviation: "MS", name: "Mississippi", fips: "28", lat: 33.0, lon: -90.0 },
    StateInfo { abbreviation: "MO", name: "Missouri", fips: "29", lat: 38.573936, lon: -92.60376 },
    StateInfo { abbreviation: "MT", name: "Montana", fips: "30", lat: 46.96526, lon: -109.533691 },
    StateInfo { abbreviation: "NE", name: "Nebraska", fips: "31", lat: 41.5, lon: -100.0 },
    StateInfo { abbreviation: "NV", name: "Nevada", fips: "32", lat: 39.876019, lon: -117.224121 },
    StateInfo { abbreviation: "NH", name: "New Hampshire", fips: "33", lat: 44.0, lon: -71.5 },
    StateInfo { abbreviation: "NJ", name: "New Jersey", fips: "34", lat: 39.833851, lon: -74.871826 },
    StateInfo { abbreviation: "NM", name: "New Mexico", fips: "35", lat: 34.307144, lon: -106.018066 },
    StateInfo { abbreviation: "NY", name: "New York", fips: "36", lat: 43.0, lon: -75.0 },
    StateInfo { abbreviation: "NC", name: "North Carolina", fips: "37", lat: 35.782169, lon: -80.793457 },
    StateInfo { abbreviation: "ND", name: "North Dakota", fips: "38", lat: 47.650589, lon: -100.437012 },
    StateInfo { abbreviation: "OH", name: "Ohio", fips: "39", lat: 40.367474, lon: -82.996216 },
    StateInfo { abbreviation: "OK", name: "Oklahoma", fips: "40", lat: 36.084621, lon: -96.921387 },
    StateInfo { abbreviation: "OR", name: "Oregon", fips: "41", lat: 44.0, lon: -120.5 },
    StateInfo { abbreviation: "PA", name: "Pennsylvania", fips: "42", lat: 41.203323, lon: -77.194527 },
    StateInfo { abbreviation: "RI", name: "Rhode Island", fips: "44", lat: 41.742325, lon: -71.742332 },
    StateInfo { abbreviation: "SC", name: "South Carolina", fips: "45", lat: 33.836082, lon: -81.163727 },
    StateInfo { abbreviation: "SD", name: "South Dakota", fips: "46", lat: 44.5, lon: -100.0 },
    StateInfo { abbreviation: "TN", name: "Tennessee", fips: "47", lat: 35.860119, lon: -86.660156 },
    StateInfo { abbreviation: "TX", name: "Texas", fips: "48", lat: 31.0, lon: -100.0 },
    StateInfo { abbreviation: "UT", name: "Utah", fips: "49", lat: 39.41922, lon: -111.950684 },
    StateInfo { abbreviation: "VT", name: "Vermont", fips: "50", lat: 44.0, lon: -72.699997 },
    StateInfo { abbreviation: "VA", name: "Virginia", fips: "51", lat: 37.926868, lon: -78.024902 },
    StateInfo { abbreviation: "WA", name: "Washington", fips: "53", lat: 47.751076, lon: -120.740135 },
    StateInfo { abbreviation: "WV", name: "West Virginia", fips: "54", lat: 39.0, lon: -80.5 },
    StateInfo { abbreviation: "WI", name: "Wisconsin", fips: "55", lat: 44.5, lon: -89.5 },
    StateInfo { abbreviation: "WY", name: "Wyoming", fips: "56", lat: 43.07597, lon: -107.290283 },
];

/// Look up a state by postal abbreviation (case-insensitive).
pub fn find(abbreviation: &str) -> Option<&'static StateInfo> {
    STATES
        .iter()
        .find(|s| s.abbreviation.eq_ignore_ascii_case(abbreviation.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_all_fifty_states() {
        assert_eq!(STATES.len(), 50);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let pa = find("pa").unwrap();
        assert_eq!(pa.name, "Pennsylvania");
        assert_eq!(pa.fips, "42");
        assert!(find(" PA ").is_some());
    }

    #[test]
    fn unknown_abbreviation_is_none() {
        assert!(find("ZZ").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn fips_codes_are_unique_and_ordered() {
        let mut prev = "";
        for state in STATES {
            assert!(state.fips > prev, "{} out of order", state.abbreviation);
            prev = state.fips;
        }
    }
}
