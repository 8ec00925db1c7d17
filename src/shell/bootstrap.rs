use crate::modules::time_zone::core::ports::LocaleFacility;
use crate::modules::time_zone::use_cases::propagate_time_zone::handler::{
    PropagateTimeZoneHandler, Propagation,
};
use crate::shared::infrastructure::static_env::StaticEnv;
use crate::shared::infrastructure::static_env::in_memory::StaticEnvTable;
use std::sync::Arc;

/// Builds the static environment for this process.
///
/// Propagation runs at most once. A failed write is logged and startup continues.
pub fn init_static_env<F: LocaleFacility>(facility: F, detect: bool) -> StaticEnv {
    let table = Arc::new(StaticEnvTable::new());
    if !detect {
        tracing::debug!("time zone detection disabled");
        return table.snapshot();
    }

    let handler = PropagateTimeZoneHandler::new(facility, table.clone());
    match handler.handle() {
        Ok(Propagation::Written(time_zone)) => {
            tracing::debug!(time_zone = %time_zone, "static env initialized");
        }
        Ok(Propagation::Unchanged) => {}
        Err(e) => tracing::warn!(error = %e, "failed to propagate host time zone"),
    }
    table.snapshot()
}

#[cfg(test)]
mod bootstrap_tests {
    use super::*;
    use crate::modules::time_zone::adapters::outbound::fixed_locale::FixedLocaleFacility;
    use rstest::rstest;

    #[rstest]
    fn it_should_carry_the_host_time_zone() {
        let env = init_static_env(FixedLocaleFacility::with_time_zone("Europe/Berlin"), true);
        assert_eq!(env.get("TZ"), Some("Europe/Berlin"));
        assert_eq!(env.len(), 1);
    }

    #[rstest]
    fn it_should_be_empty_when_detection_is_disabled() {
        let env = init_static_env(FixedLocaleFacility::with_time_zone("Europe/Berlin"), false);
        assert!(env.is_empty());
    }

    #[rstest]
    fn it_should_be_empty_when_the_host_has_no_time_zone() {
        let env = init_static_env(FixedLocaleFacility::absent(), true);
        assert!(env.is_empty());
    }

    #[rstest]
    fn it_should_continue_with_an_empty_env_when_the_write_is_rejected() {
        let env = init_static_env(FixedLocaleFacility::with_time_zone("bad\0zone"), true);
        assert!(env.is_empty());
    }
}
