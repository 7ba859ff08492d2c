//! Formatting for the [PatchRecord] and [Series] types.

use super::{PatchRecord, PatchState, Series};
use crate::{
    constants::{MARKER_GLYPH, MARKER_PLACEHOLDER},
    errors::SgResult,
};
use nu_ansi_term::{AnsiString, Color};
use std::fmt::{Display, Write};

/// Semantic style tags for the tokens of a rendered series row. The mapping
/// from tag to concrete visual attributes lives in [StyleTag::paint], so the
/// token list itself stays display-agnostic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StyleTag {
    /// The state flag of the current patch.
    StateCurrent,
    /// The state flag of an applied patch.
    StateApplied,
    /// The state flag of an unapplied patch.
    StateUnapplied,
    /// The state flag of a hidden patch.
    StateHidden,
    /// The marker column.
    Marker,
    /// The pass-through empty flag.
    EmptyFlag,
    /// The patch name.
    PatchName,
    /// The commit-message summary.
    Description,
}

impl StyleTag {
    /// Returns the tag styling the flag glyph of the given [PatchState].
    pub const fn for_state(state: PatchState) -> Self {
        match state {
            PatchState::Current => Self::StateCurrent,
            PatchState::Applied => Self::StateApplied,
            PatchState::Unapplied => Self::StateUnapplied,
            PatchState::Hidden => Self::StateHidden,
        }
    }

    /// Applies the concrete ANSI style for this tag to the given text.
    pub fn paint(&self, text: &str) -> AnsiString<'static> {
        match self {
            Self::StateCurrent => Color::Yellow.bold().paint(text.to_string()),
            Self::StateApplied => Color::Green.paint(text.to_string()),
            Self::StateUnapplied => Color::DarkGray.paint(text.to_string()),
            Self::StateHidden => Color::Red.paint(text.to_string()),
            Self::Marker => Color::Cyan.bold().paint(text.to_string()),
            Self::EmptyFlag => Color::Purple.paint(text.to_string()),
            Self::PatchName => Color::Blue.paint(text.to_string()),
            Self::Description => Color::Default.paint(text.to_string()),
        }
    }
}

impl PatchRecord {
    /// Renders this record into an ordered list of `(text, tag)` tokens:
    /// state flag, marker column, empty flag, name and description. Pure in
    /// the record; the same record always yields identical tokens.
    pub fn render(&self) -> Vec<(String, StyleTag)> {
        let marker = self
            .marked
            .then_some(MARKER_GLYPH)
            .unwrap_or(MARKER_PLACEHOLDER);

        vec![
            (
                self.state.flag().to_string(),
                StyleTag::for_state(self.state),
            ),
            (marker.to_string(), StyleTag::Marker),
            (self.empty_flag.to_string(), StyleTag::EmptyFlag),
            (self.name.clone(), StyleTag::PatchName),
            (self.description.clone(), StyleTag::Description),
        ]
    }

    /// Paints the rendered tokens into a single display line.
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        for (i, (text, tag)) in self.render().iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&tag.paint(text).to_string());
        }
        line
    }
}

impl Series {
    /// Writes the styled series view to the passed [Write]r, one line per
    /// patch, in stack order.
    ///
    /// ## Takes
    /// - `w` - The writer to write the series view to.
    ///
    /// ## Returns
    /// - `Ok(_)` - Series successfully written.
    /// - `Err(_)` - If an error occurs while writing the series.
    pub fn write_series<W: Write>(&self, w: &mut W) -> SgResult<()> {
        for patch in &self.patches {
            writeln!(w, "{}", patch.to_line())?;
        }
        Ok(())
    }

    /// Gathers an in-order list of [DisplayPatch]es, pairing display line and
    /// patch name.
    ///
    /// This function is particularly useful when creating prompts with [inquire::Select].
    pub fn display_patches(&self) -> Vec<DisplayPatch> {
        self.patches
            .iter()
            .map(|patch| DisplayPatch {
                line: patch.to_line(),
                patch_name: patch.name.clone(),
            })
            .collect()
    }
}

/// A pair of a display line and a patch name.
#[derive(Debug)]
pub struct DisplayPatch {
    /// The styled line to display.
    pub(crate) line: String,
    /// The patch name corresponding to the line.
    pub(crate) patch_name: String,
}

impl Display for DisplayPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.line)
    }
}

#[cfg(test)]
mod test {
    use super::StyleTag;
    use crate::series::{PatchRecord, PatchState, Series};

    fn record(marked: bool) -> PatchRecord {
        PatchRecord {
            name: "patch-a".to_string(),
            state: PatchState::Applied,
            empty_flag: '0',
            marked,
            description: "add foo".to_string(),
        }
    }

    #[test]
    fn render_token_order_and_tags() {
        let tokens = record(false).render();

        let tags = tokens.iter().map(|(_, tag)| *tag).collect::<Vec<_>>();
        assert_eq!(
            tags,
            [
                StyleTag::StateApplied,
                StyleTag::Marker,
                StyleTag::EmptyFlag,
                StyleTag::PatchName,
                StyleTag::Description,
            ]
        );
        assert_eq!(tokens[0].0, "+");
        assert_eq!(tokens[2].0, "0");
        assert_eq!(tokens[3].0, "patch-a");
        assert_eq!(tokens[4].0, "add foo");
    }

    #[test]
    fn render_is_pure() {
        let record = record(true);
        assert_eq!(record.render(), record.render());
        assert_eq!(record.to_line(), record.to_line());
    }

    #[test]
    fn marker_column_keeps_width() {
        let marked = record(true).render();
        let unmarked = record(false).render();

        assert_eq!(marked[1].0, "<");
        assert_eq!(unmarked[1].0, " ");
        assert_eq!(marked[1].0.len(), unmarked[1].0.len());
    }

    #[test]
    fn each_state_gets_a_distinct_tag() {
        let states = [
            PatchState::Current,
            PatchState::Applied,
            PatchState::Unapplied,
            PatchState::Hidden,
        ];
        let mut tags = states.map(StyleTag::for_state).to_vec();
        tags.dedup();
        assert_eq!(tags.len(), states.len());
    }

    #[test]
    fn display_patches_pair_lines_with_names() {
        let raw = " + a # one\n - b # two";
        let series = Series::parse(raw, None).unwrap();

        let display = series.display_patches();
        assert_eq!(display.len(), 2);
        assert_eq!(display[0].patch_name, "a");
        assert_eq!(display[1].patch_name, "b");
    }
}
