use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

// keys are stored verbatim: the only persisted value in this app is the
// documented "theme" preference

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    LocalStorage::set(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    LocalStorage::get(key).map_err(|err| {
        // an unset key is the normal first visit, not worth a console line
        if !matches!(err, StorageError::KeyNotFound(_)) {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
        }
        anyhow::Error::msg("Local storage failure, see console log")
    })
}
