use crate::modules::time_zone::core::resolved_options::ResolvedOptions;
use crate::modules::time_zone::use_cases::propagate_time_zone::decision::Decision;
use crate::shared::infrastructure::static_env::TZ_KEY;

pub fn decide_propagation(resolved: Option<&ResolvedOptions>) -> Decision {
    match resolved.and_then(ResolvedOptions::time_zone_id) {
        Some(value) => Decision::Write { key: TZ_KEY, value },
        None => Decision::Unchanged,
    }
}
