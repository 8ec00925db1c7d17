use crate::shared::infrastructure::static_env::StaticEnv;

/// Reads `key` from the static environment first, then from `fallback`.
///
/// The shell passes the real process environment as the fallback, so a propagated `TZ`
/// shadows whatever the process was started with.
pub fn lookup_env<F>(static_env: &StaticEnv, key: &str, fallback: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    match static_env.get(key) {
        Some(value) => Some(value.to_string()),
        None => fallback(key),
    }
}
