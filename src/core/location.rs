use once_cell::sync::Lazy;
use regex::Regex;

/// "TX 77002" after a comma, whitespace, or the start of the string
static REGION_POSTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[,\s])([A-Z]{2})\s+([0-9]{5})\b").unwrap());

/// A lone two-letter uppercase token bounded by non-letters or string edges
static REGION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^A-Za-z])([A-Z]{2})(?:[^A-Za-z]|$)").unwrap());

/// Region and postal code pulled out of a free-text location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLocation {
    pub region: Option<String>,
    pub postal: Option<String>,
}

/// Best-effort extraction of a two-letter region and a 5-digit postal code
///
/// Looks for the combined "XX 12345" form first. If that is missing, falls back
/// to a standalone region token and leaves `postal` empty. Never fails; text
/// with neither yields an empty `ParsedLocation`.
pub fn extract_region_and_postal(location: &str) -> ParsedLocation {
    if let Some(caps) = REGION_POSTAL_RE.captures(location) {
        return ParsedLocation {
            region: caps.get(1).map(|m| m.as_str().to_string()),
            postal: caps.get(2).map(|m| m.as_str().to_string()),
        };
    }

    ParsedLocation {
        region: REGION_RE
            .captures(location)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        postal: None,
    }
}
