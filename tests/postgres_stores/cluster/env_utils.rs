//! Environment preparation for the embedded cluster.

use super::BoxError;
use pg_embedded_setup_unpriv::{ExecutionPrivileges, detect_execution_privileges};
use std::ffi::OsString;
use std::net::TcpListener;

const WORKER_VAR: &str = "PG_EMBEDDED_WORKER";
const WORKER_BINARY: &str = "pg_worker";

pub(super) fn env_vars_to_os(
    env_vars: &[(String, Option<String>)],
) -> Vec<(OsString, Option<OsString>)> {
    env_vars
        .iter()
        .map(|(key, value)| (OsString::from(key), value.as_ref().map(OsString::from)))
        .collect()
}

/// Variables to set while `bootstrap_for_tests` reads the environment.
///
/// Picks a free port unless `PG_PORT` is already set. Under root the cluster
/// is driven through a worker binary, which must be named by
/// `PG_EMBEDDED_WORKER` or found on `PATH`.
pub(super) fn bootstrap_env_changes() -> Result<Vec<(OsString, Option<OsString>)>, BoxError> {
    let mut changes = Vec::new();
    if let Some(port) = free_port()? {
        changes.push((OsString::from("PG_PORT"), Some(port)));
    }

    if matches!(detect_execution_privileges(), ExecutionPrivileges::Root)
        && std::env::var_os(WORKER_VAR).is_none()
    {
        let worker = locate_worker_on_path().ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "running as root needs PG_EMBEDDED_WORKER or a pg_worker binary on PATH",
            )) as BoxError
        })?;
        changes.push((OsString::from(WORKER_VAR), Some(worker)));
    }

    Ok(changes)
}

fn free_port() -> Result<Option<OsString>, BoxError> {
    if std::env::var_os("PG_PORT").is_some() {
        return Ok(None);
    }

    let listener = TcpListener::bind(("127.0.0.1", 0)).map_err(|err| Box::new(err) as BoxError)?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|err| Box::new(err) as BoxError)?;
    drop(listener);

    Ok(Some(OsString::from(port.to_string())))
}

fn locate_worker_on_path() -> Option<OsString> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(WORKER_BINARY))
        .find(|candidate| candidate.is_file())
        .map(std::path::PathBuf::into_os_string)
}
