use std::fmt;

/// Host-reported time zone identifier, e.g. `America/New_York`.
///
/// The value is opaque: it is carried exactly as the host reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    /// Returns `None` for a missing or empty value, which the host uses to mean "no time zone".
    pub fn from_host(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => None,
            Some(s) => Some(Self(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
