use crate::modules::time_zone::core::time_zone_id::TimeZoneId;

/// Resolved configuration reported by the host locale facility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub time_zone: Option<String>,
}

impl ResolvedOptions {
    pub fn time_zone_id(&self) -> Option<TimeZoneId> {
        TimeZoneId::from_host(self.time_zone.as_deref())
    }
}
