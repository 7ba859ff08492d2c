//! The in-memory context of the `sg` application.

use crate::{
    constants::{GIT_DIR, SG_CTX_FILE_NAME},
    errors::{SgError, SgResult},
    series::Series,
    stg,
};
use git2::Repository;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

mod actions;
mod fmt;

/// Returns the path to the persistent application context for the given [Repository].
///
/// ## Takes
/// - `repository` - The repository to get the context path for.
///
/// ## Returns
/// - `Some(PathBuf)` - The path to the serialized context.
/// - `None` - If the repository does not have a workdir.
pub fn ctx_path(repository: &Repository) -> Option<PathBuf> {
    repository
        .workdir()
        .map(|p| p.join(GIT_DIR).join(SG_CTX_FILE_NAME))
}

/// The persisted slice of the context: the single marked patch of the viewing
/// context, used as the default target for patch commands.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SgState {
    /// The name of the marked patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marked_patch: Option<String>,
}

impl SgState {
    /// Clears the mark when it points at the given patch. A mark on any
    /// other patch is left in place.
    pub fn clear_mark_for(&mut self, name: &str) {
        if self.marked_patch.as_deref() == Some(name) {
            self.marked_patch = None;
        }
    }
}

/// The in-memory context of the `sg` application.
pub struct SgContext {
    /// The repository the series belongs to.
    pub repository: Repository,
    /// The persisted state for the repository.
    pub state: SgState,
}

impl SgContext {
    /// Discovers the repository enclosing the current working directory and
    /// loads its persisted state, falling back to a fresh one.
    pub fn discover() -> SgResult<Self> {
        let repository = match Repository::discover(env::current_dir()?) {
            Ok(repository) => repository,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(SgError::NotAGitRepository)
            }
            Err(e) => return Err(e.into()),
        };

        let state = match ctx_path(&repository) {
            Some(path) if path.exists() => toml::from_str(&std::fs::read_to_string(path)?)?,
            _ => SgState::default(),
        };

        Ok(Self { repository, state })
    }

    /// The working tree of the repository. Bare repositories are rejected, as
    /// `stg` itself requires a working tree.
    pub fn workdir(&self) -> SgResult<&Path> {
        self.repository.workdir().ok_or(SgError::BareRepository)
    }

    /// The currently marked patch name, if one is set.
    pub fn marked(&self) -> Option<&str> {
        self.state.marked_patch.as_deref()
    }

    /// Marks the given patch, replacing any previous mark.
    pub fn set_mark(&mut self, name: String) {
        self.state.marked_patch = Some(name);
    }

    /// Clears the patch mark.
    pub fn clear_mark(&mut self) {
        self.state.marked_patch = None;
    }

    /// Runs `stg series` and parses the output into a fresh [Series]
    /// snapshot, applying the persisted mark.
    pub fn load_series(&self) -> SgResult<Series> {
        let raw = stg::run_stg_captured(
            &["series", "--description", "--empty"],
            self.workdir()?,
        )?;
        Series::parse(&raw, self.marked())
    }

    /// Serializes the persisted state and writes it back to disk.
    fn persist(&self) -> SgResult<()> {
        if let Some(path) = ctx_path(&self.repository) {
            std::fs::write(path, toml::to_string_pretty(&self.state)?)?;
        }
        Ok(())
    }
}

impl Drop for SgContext {
    fn drop(&mut self) {
        // Persist the state on drop.
        self.persist().expect("Failed to persist context to disk.");
    }
}

#[cfg(test)]
mod test {
    use super::SgState;

    #[test]
    fn state_round_trips_through_toml() {
        let state = SgState {
            marked_patch: Some("patch-a".to_string()),
        };

        let serialized = toml::to_string_pretty(&state).unwrap();
        assert!(serialized.contains("marked-patch"));
        assert_eq!(toml::from_str::<SgState>(&serialized).unwrap(), state);
    }

    #[test]
    fn empty_state_serializes_to_nothing() {
        let serialized = toml::to_string_pretty(&SgState::default()).unwrap();
        assert!(serialized.is_empty());
    }

    #[test]
    fn discarding_the_marked_patch_clears_the_mark() {
        let mut state = SgState {
            marked_patch: Some("patch-a".to_string()),
        };

        state.clear_mark_for("patch-a");
        assert!(state.marked_patch.is_none());
    }

    #[test]
    fn discarding_another_patch_keeps_the_mark() {
        let mut state = SgState {
            marked_patch: Some("patch-a".to_string()),
        };

        state.clear_mark_for("patch-b");
        assert_eq!(state.marked_patch.as_deref(), Some("patch-a"));
    }
}
