//! Actions that can be dispatched by the user.

use super::SgContext;
use crate::{
    errors::{SgError, SgResult},
    series::PatchRecord,
    stg,
};
use nu_ansi_term::Color;

impl SgContext {
    /// Resolves the patch a command should target: an explicit argument wins,
    /// then the marked patch, then an interactive selection over the series.
    /// A mark pointing at a patch that is no longer in the series is ignored.
    ///
    /// ## Takes
    /// - `name` - The explicit patch name argument, if any.
    /// - `prompt` - The prompt to display when a selection is needed.
    ///
    /// ## Returns
    /// - `Ok(name)` - The resolved patch name.
    /// - `Err(_)` - If the explicit name is unknown or the series is empty.
    pub fn resolve_patch(&self, name: Option<String>, prompt: &str) -> SgResult<String> {
        let series = self.load_series()?;

        if let Some(name) = name {
            // Surface unknown names before shelling out to a mutating command.
            if series.get(&name).is_none() {
                return Err(SgError::PatchNotFound(name));
            }
            return Ok(name);
        }

        if let Some(marked) = series.marked_record(self.marked()) {
            return Ok(marked.name.clone());
        }

        if series.is_empty() {
            return Err(SgError::EmptySeries);
        }

        // Start the selection cursor on the current patch, when there is one.
        let cursor = series
            .current()
            .and_then(|current| series.patches.iter().position(|p| p.name == current.name))
            .unwrap_or_default();
        let selection = inquire::Select::new(prompt, series.display_patches())
            .with_starting_cursor(cursor)
            .with_formatter(&|f| f.value.patch_name.clone())
            .prompt()?;

        Ok(selection.patch_name)
    }

    /// Asks the user for confirmation before discarding a patch with
    /// `stg delete`.
    pub fn discard_patch(&mut self, name: &str) -> SgResult<()> {
        let is_empty = self
            .load_series()?
            .get(name)
            .is_some_and(PatchRecord::is_empty);
        let kind = if is_empty { "empty patch" } else { "patch" };

        // Ask for confirmation to prevent accidental deletion of patches.
        let confirm = inquire::Confirm::new(
            format!(
                "Are you sure you want to discard {} `{}`?",
                kind,
                Color::Blue.paint(name)
            )
            .as_str(),
        )
        .with_default(false)
        .prompt()?;

        // Exit early if the user doesn't confirm.
        if !confirm {
            return Ok(());
        }

        stg::run_stg_captured(&["delete", name], self.workdir()?)?;

        // Drop the mark if it pointed at the discarded patch.
        self.state.clear_mark_for(name);

        Ok(())
    }
}
