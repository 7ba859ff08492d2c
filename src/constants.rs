//! Constants for the `sg` application.

/// Name of the per-repository context file, stored inside the git metadata
/// directory.
pub(crate) const SG_CTX_FILE_NAME: &str = ".sg_ctx.toml";

/// Name of the git metadata directory within a working tree.
pub(crate) const GIT_DIR: &str = ".git";

/// Glyph rendered in the marker column for the marked patch.
pub(crate) const MARKER_GLYPH: char = '<';

/// Placeholder for the marker column, equal in width to [MARKER_GLYPH] so
/// that unmarked rows stay column-aligned.
pub(crate) const MARKER_PLACEHOLDER: char = ' ';
