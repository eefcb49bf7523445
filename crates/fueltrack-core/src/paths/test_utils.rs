//! Helpers for tests that touch `FUELTRACK_DATA_DIR`.

use std::env;
use std::sync::{Mutex, PoisonError};

use super::data::DATA_DIR_ENV;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `FUELTRACK_DATA_DIR` set to `value`, then restore it.
///
/// Calls are serialized so parallel tests never observe each other's value.
#[allow(unsafe_code)]
pub fn with_data_dir_env<R>(value: &str, f: impl FnOnce() -> R) -> R {
    let _lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = env::var_os(DATA_DIR_ENV);

    // SAFETY: ENV_LOCK serializes every test that mutates this variable.
    unsafe { env::set_var(DATA_DIR_ENV, value) };
    let result = f();
    match previous {
        Some(old) => unsafe { env::set_var(DATA_DIR_ENV, old) },
        None => unsafe { env::remove_var(DATA_DIR_ENV) },
    }
    result
}
