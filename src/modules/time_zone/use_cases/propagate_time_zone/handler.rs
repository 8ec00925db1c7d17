use crate::modules::time_zone::core::ports::{DateTimeFormatter, LocaleFacility};
use crate::modules::time_zone::core::time_zone_id::TimeZoneId;
use crate::modules::time_zone::use_cases::propagate_time_zone::decide::decide_propagation;
use crate::modules::time_zone::use_cases::propagate_time_zone::decision::Decision;
use crate::shared::infrastructure::static_env::{StaticEnvError, StaticEnvSink};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    StaticEnv(#[from] StaticEnvError),
}

/// Outcome of one propagation run. Absence of a time zone is not distinguished by cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Propagation {
    Written(TimeZoneId),
    Unchanged,
}

pub struct PropagateTimeZoneHandler<TFacility, TSink>
where
    TFacility: LocaleFacility,
    TSink: StaticEnvSink + 'static,
{
    facility: TFacility,
    sink: Arc<TSink>,
}

impl<TFacility, TSink> PropagateTimeZoneHandler<TFacility, TSink>
where
    TFacility: LocaleFacility,
    TSink: StaticEnvSink + 'static,
{
    pub fn new(facility: TFacility, sink: Arc<TSink>) -> Self {
        Self { facility, sink }
    }

    pub fn handle(&self) -> Result<Propagation, ApplicationError> {
        let Some(formatter) = self.facility.date_time_format() else {
            tracing::debug!("host locale facility unavailable");
            return Ok(Propagation::Unchanged);
        };
        let resolved = formatter.resolved_options();
        if resolved.is_none() {
            tracing::debug!("host locale facility returned no resolved options");
        }

        match decide_propagation(resolved.as_ref()) {
            Decision::Write { key, value } => {
                self.sink.set_static_env(key, value.as_str())?;
                tracing::info!(key, time_zone = %value, "propagated host time zone");
                Ok(Propagation::Written(value))
            }
            Decision::Unchanged => {
                tracing::debug!("no host time zone to propagate");
                Ok(Propagation::Unchanged)
            }
        }
    }
}
