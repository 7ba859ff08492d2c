//! Error types for the `sg` application.

use nu_ansi_term::Color;
use thiserror::Error;

/// Errors that can occur while running `sg`.
#[derive(Error, Debug)]
pub enum SgError {
    /// A series line did not match the `<empty><state> <name> # <description>` format.
    #[error("Malformed series line: `{}`", Color::Red.paint(.0))]
    MalformedLine(String),
    /// A series line carried a state flag outside of `>`, `+`, `-` and `!`.
    #[error("Unknown patch state flag: `{}`", Color::Red.paint(.0.to_string()))]
    UnknownState(char),
    /// The patch is not present in the current series.
    #[error("Patch `{}` not found in the series.", Color::Blue.paint(.0))]
    PatchNotFound(String),
    /// The series has no patches to act on.
    #[error("The series is empty.")]
    EmptySeries,
    /// The working directory is not within a git repository.
    #[error("Not within a git repository.")]
    NotAGitRepository,
    /// The repository has no working tree, which `stg` requires.
    #[error("The repository has no working tree.")]
    BareRepository,
    /// `stg` exited with a failure status.
    #[error("`stg {command}` failed: {stderr}")]
    StgCommandFailed {
        /// The arguments `stg` was invoked with.
        command: String,
        /// The captured stderr of the failed invocation.
        stderr: String,
    },
    /// An [std::io::Error] occurred.
    #[error("io error: {}", .0)]
    IoError(#[from] std::io::Error),
    /// An [std::fmt::Error] occurred.
    #[error("fmt error: {}", .0)]
    FmtError(#[from] std::fmt::Error),
    /// A [git2::Error] occurred.
    #[error("libgit2 error: {}", .0)]
    Git2Error(#[from] git2::Error),
    /// An [inquire::InquireError] occurred.
    #[error("inquire error: {}", .0)]
    InquireError(#[from] inquire::InquireError),
    /// Failed to deserialize the persisted context.
    #[error("failed to deserialize context: {}", .0)]
    TomlDeError(#[from] toml::de::Error),
    /// Failed to serialize the persisted context.
    #[error("failed to serialize context: {}", .0)]
    TomlSeError(#[from] toml::ser::Error),
    /// An [anyhow::Error] occurred.
    #[error("anyhow error: {}", .0)]
    AnyhowError(#[from] anyhow::Error),
}

/// Result alias for fallible `sg` operations.
pub type SgResult<T> = Result<T, SgError>;
