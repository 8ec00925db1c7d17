// Locale facility with a fixed answer.
//
// Purpose
// - Embed a host that is known ahead of time, and model each absence level in tests.

use crate::modules::time_zone::core::ports::{DateTimeFormatter, LocaleFacility};
use crate::modules::time_zone::core::resolved_options::ResolvedOptions;

#[derive(Debug, Clone, Default)]
pub struct FixedLocaleFacility {
    formatter: Option<FixedDateTimeFormat>,
}

#[derive(Debug, Clone)]
pub struct FixedDateTimeFormat {
    options: Option<ResolvedOptions>,
}

impl FixedLocaleFacility {
    /// A host with no locale facility at all.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A facility whose formatter reports no resolved configuration.
    pub fn without_resolved_options() -> Self {
        Self {
            formatter: Some(FixedDateTimeFormat { options: None }),
        }
    }

    pub fn with_options(options: ResolvedOptions) -> Self {
        Self {
            formatter: Some(FixedDateTimeFormat {
                options: Some(options),
            }),
        }
    }

    pub fn with_time_zone(time_zone: impl Into<String>) -> Self {
        Self::with_options(ResolvedOptions {
            time_zone: Some(time_zone.into()),
        })
    }
}

impl LocaleFacility for FixedLocaleFacility {
    type Formatter = FixedDateTimeFormat;

    fn date_time_format(&self) -> Option<Self::Formatter> {
        self.formatter.clone()
    }
}

impl DateTimeFormatter for FixedDateTimeFormat {
    fn resolved_options(&self) -> Option<ResolvedOptions> {
        self.options.clone()
    }
}
