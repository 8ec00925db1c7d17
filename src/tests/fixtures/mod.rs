pub mod resolved_options;
