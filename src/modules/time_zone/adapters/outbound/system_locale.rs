// Locale facility backed by the operating system.
//
// Asks `iana-time-zone` for the configured IANA time zone.
// A lookup failure is logged and reported as an absent field.

use crate::modules::time_zone::core::ports::{DateTimeFormatter, LocaleFacility};
use crate::modules::time_zone::core::resolved_options::ResolvedOptions;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleFacility;

#[derive(Debug, Clone, Copy)]
pub struct SystemDateTimeFormat;

impl SystemLocaleFacility {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleFacility for SystemLocaleFacility {
    type Formatter = SystemDateTimeFormat;

    fn date_time_format(&self) -> Option<Self::Formatter> {
        Some(SystemDateTimeFormat)
    }
}

impl DateTimeFormatter for SystemDateTimeFormat {
    fn resolved_options(&self) -> Option<ResolvedOptions> {
        let time_zone = match iana_time_zone::get_timezone() {
            Ok(tz) => Some(tz),
            Err(e) => {
                tracing::debug!(error = %e, "host time zone lookup failed");
                None
            }
        };
        Some(ResolvedOptions { time_zone })
    }
}
