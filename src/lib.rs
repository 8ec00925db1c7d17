pub mod shared {
    pub mod infrastructure {
        pub mod static_env;
    }
}

pub mod modules {
    pub mod time_zone {
        pub mod core {
            pub mod ports;
            pub mod resolved_options;
            pub mod time_zone_id;
        }
        pub mod use_cases {
            pub mod propagate_time_zone {
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod lookup_env {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod fixed_locale;
                pub mod system_locale;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
