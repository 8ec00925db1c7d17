// Ports describe the host capability the propagator reads from.
//
// Boundaries
// - No platform calls here. Adapters in `adapters::outbound` implement these traits.
//
// Each step may be unavailable on a given host. Absence is modelled with `Option`, never an error.

use crate::modules::time_zone::core::resolved_options::ResolvedOptions;

pub trait LocaleFacility {
    type Formatter: DateTimeFormatter;

    fn date_time_format(&self) -> Option<Self::Formatter>;
}

pub trait DateTimeFormatter {
    fn resolved_options(&self) -> Option<ResolvedOptions>;
}
