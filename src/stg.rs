//! Utilities for invoking the `stg` executable for the `sg` application.

use crate::errors::{SgError, SgResult};
use std::{
    path::Path,
    process::{Command, Stdio},
};
use tracing::debug;

/// Runs `stg` with the given arguments inside `workdir`, capturing stdout.
///
/// ## Takes
/// - `args` - The arguments to pass to `stg`.
/// - `workdir` - The working tree to run the command in.
///
/// ## Returns
/// - `Ok(String)` - The captured stdout on a zero exit status.
/// - `Err(_)` - [SgError::StgCommandFailed] carrying stderr otherwise.
pub fn run_stg_captured(args: &[&str], workdir: &Path) -> SgResult<String> {
    debug!(target: "stg", "running `stg {}`", args.join(" "));

    let output = Command::new("stg")
        .args(args)
        .current_dir(workdir)
        .output()?;
    if !output.status.success() {
        return Err(SgError::StgCommandFailed {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Runs `stg` with the given arguments, inheriting stdio. Used for
/// passthrough commands such as `show`, where `stg` drives the terminal
/// (including its pager) directly.
pub fn run_stg_passthrough(args: &[&str], workdir: &Path) -> SgResult<()> {
    debug!(target: "stg", "running `stg {}`", args.join(" "));

    let status = Command::new("stg")
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    if !status.success() {
        return Err(SgError::StgCommandFailed {
            command: args.join(" "),
            stderr: format!("exit status: {}", status),
        });
    }

    Ok(())
}
