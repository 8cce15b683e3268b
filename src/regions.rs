//! Mapping the short region codes our api accepts to the long locale names
//! google trends wants.

/// Used when someone asks for a region we don't know about.
pub const FALLBACK_LOCALE: &str = "united_states";

static REGION_LOCALES: &[(&str, &str)] = &[
    ("KE", "kenya"),
    ("US", "united_states"),
    ("UK", "united_kingdom"),
    ("CA", "canada"),
    ("AU", "australia"),
];

/// The countries shown on the overview, as `(response key, locale)`. The order
/// here is the order they're fetched and serialized in.
pub static OVERVIEW_COUNTRIES: &[(&str, &str)] = &[
    ("kenya", "kenya"),
    ("us", "united_states"),
    ("uk", "united_kingdom"),
];

/// Resolve a region code like `KE` into a locale name like `kenya`. Codes are
/// matched exactly, so `ke` isn't a known region.
pub fn resolve(code: &str) -> &'static str {
    REGION_LOCALES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(FALLBACK_LOCALE, |(_, locale)| locale)
}
