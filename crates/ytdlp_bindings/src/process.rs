use std::{ffi::OsString, path::Path, process::Stdio};

use tokio::process::Command;

use crate::Error;

/// Runs `program` to completion and returns its stdout.
///
/// The child is killed if the returned future is dropped before it resolves.
pub(crate) async fn run(program: &Path, args: &[OsString]) -> Result<Vec<u8>, Error> {
    let name = program.display().to_string();
    tracing::debug!(program = %name, ?args, "Running external tool");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| Error::Spawn {
            program: name.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::NonZeroExit {
            program: name,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
