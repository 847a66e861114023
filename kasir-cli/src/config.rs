//! Environment loading
//!
//! `.env` in the working directory is read first; variables already in the
//! process environment are never overwritten. Keys written with dots
//! (`DB.CONN`) are also exposed under their underscore form (`DB_CONN`).

use std::env;

/// Load `.env` and normalize dotted keys.
///
/// Must run before any other thread is spawned.
pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Warning: ignoring unreadable .env file: {}", e),
    }

    for (key, value) in dotted_aliases(env::vars()) {
        env::set_var(key, value);
    }
}

/// Underscore aliases for dotted keys that are not already set.
fn dotted_aliases(vars: impl Iterator<Item = (String, String)>) -> Vec<(String, String)> {
    let vars: Vec<(String, String)> = vars.collect();

    vars.iter()
        .filter(|(key, _)| key.contains('.'))
        .map(|(key, value)| (key.replace('.', "_"), value.clone()))
        .filter(|(alias, _)| !vars.iter().any(|(key, _)| key == alias))
        .collect()
}
