use crate::modules::time_zone::core::time_zone_id::TimeZoneId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Write {
        key: &'static str,
        value: TimeZoneId,
    },
    Unchanged,
}
