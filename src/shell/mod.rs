// Composition root for the tz_env binary.
//
// Responsibilities
// - Read config from the environment and set up tracing.
// - Run the time zone propagation once against the host locale facility.
// - Hand the resulting static environment to the binary.

pub mod bootstrap;
pub mod config;
pub mod logging;
