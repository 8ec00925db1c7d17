use crate::modules::time_zone::core::resolved_options::ResolvedOptions;

pub fn make_resolved_options(time_zone: Option<&str>) -> ResolvedOptions {
    ResolvedOptions {
        time_zone: time_zone.map(str::to_string),
    }
}
