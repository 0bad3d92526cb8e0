//! Fixed country and state lists with lookup and pagination.

use serde::{Deserialize, Serialize};

/// The fixed country list used by the membership test.
pub const COUNTRIES: [&str; 4] = ["India", "USA", "UK", "Australia"];

/// The fixed state list used by the pagination slice.
pub const STATES: [&str; 8] = [
    "Punjab",
    "Haryana",
    "Rajasthan",
    "Gujarat",
    "Maharashtra",
    "Karnataka",
    "Kerala",
    "Goa",
];

/// Outcome of a country membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryLookup {
    /// The queried name is in the fixed list.
    Found,
    /// The queried name is not in the fixed list.
    NotFound,
    /// No query parameter was supplied.
    NoQueryParam,
}

impl CountryLookup {
    /// Returns the response detail line for this outcome.
    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            Self::Found => "Country found",
            Self::NotFound => "Country not found",
            Self::NoQueryParam => "No Query Param",
        }
    }
}

/// Tests an optional query value against the fixed country list.
#[must_use]
pub fn lookup_country(name: Option<&str>) -> CountryLookup {
    match name {
        None => CountryLookup::NoQueryParam,
        Some(name) if COUNTRIES.contains(&name) => CountryLookup::Found,
        Some(_) => CountryLookup::NotFound,
    }
}

/// How the `limit` pagination parameter bounds the state slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceMode {
    /// Historical behavior: `limit` is used as an end index, with one extra
    /// element included by the `+1` slice bound. `skip=2, limit=3` yields
    /// elements 2 and 3.
    LimitAsEnd,
    /// Corrected behavior: `limit` is the element count. `skip=2, limit=3`
    /// yields elements 2, 3 and 4.
    LimitAsCount,
}

impl Default for SliceMode {
    fn default() -> Self {
        Self::LimitAsEnd
    }
}

/// Slices the fixed state list with the given pagination pair.
///
/// Out-of-range bounds clamp to the list length; an inverted range yields an
/// empty slice.
#[must_use]
pub fn slice_states(skip: usize, limit: usize, mode: SliceMode) -> &'static [&'static str] {
    let end = match mode {
        SliceMode::LimitAsEnd => limit.saturating_add(1),
        SliceMode::LimitAsCount => skip.saturating_add(limit),
    };

    let start = skip.min(STATES.len());
    let end = end.min(STATES.len());
    if start >= end {
        return &[];
    }
    &STATES[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_membership() {
        assert_eq!(lookup_country(Some("USA")), CountryLookup::Found);
        assert_eq!(lookup_country(Some("Nowhere")), CountryLookup::NotFound);
        assert_eq!(lookup_country(None), CountryLookup::NoQueryParam);
    }

    #[test]
    fn test_country_details() {
        assert_eq!(lookup_country(Some("India")).detail(), "Country found");
        assert_eq!(lookup_country(Some("Mars")).detail(), "Country not found");
        assert_eq!(lookup_country(None).detail(), "No Query Param");
    }

    #[test]
    fn test_limit_as_end_keeps_the_plus_one() {
        // skip=2, limit=3 slices [2..4): exactly two elements.
        let slice = slice_states(2, 3, SliceMode::LimitAsEnd);
        assert_eq!(slice, &STATES[2..4]);
        assert_eq!(slice.len(), 2);
    }

    #[test]
    fn test_limit_as_count_is_corrected() {
        let slice = slice_states(2, 3, SliceMode::LimitAsCount);
        assert_eq!(slice, &STATES[2..5]);
        assert_eq!(slice.len(), 3);
    }

    #[test]
    fn test_bounds_clamp_to_list_length() {
        assert_eq!(slice_states(0, 100, SliceMode::LimitAsEnd).len(), 8);
        assert_eq!(slice_states(100, 3, SliceMode::LimitAsEnd), &[] as &[&str]);
        assert_eq!(slice_states(6, 100, SliceMode::LimitAsCount).len(), 2);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        // skip beyond the end index the limit implies.
        assert_eq!(slice_states(5, 2, SliceMode::LimitAsEnd), &[] as &[&str]);
    }
}
