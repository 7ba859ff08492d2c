//! Structured representation of an StGit patch series, parsed from the
//! line-oriented output of `stg series`.

use crate::errors::{SgError, SgResult};

mod fmt;

/// The state of a patch within the series.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PatchState {
    /// The applied patch at the top of the stack.
    Current,
    /// Applied to the history of the working tree.
    Applied,
    /// Not currently applied.
    Unapplied,
    /// Excluded from normal operations without being deleted.
    Hidden,
}

impl PatchState {
    /// Maps an `stg series` state flag to a [PatchState].
    ///
    /// ## Takes
    /// - `flag` - The state flag character of a series line.
    ///
    /// ## Returns
    /// - `Ok(state)` - For the four recognized flags.
    /// - `Err(_)` - [SgError::UnknownState] for any other character.
    pub fn from_flag(flag: char) -> SgResult<Self> {
        match flag {
            '>' => Ok(Self::Current),
            '+' => Ok(Self::Applied),
            '-' => Ok(Self::Unapplied),
            '!' => Ok(Self::Hidden),
            _ => Err(SgError::UnknownState(flag)),
        }
    }

    /// Returns the flag character `stg series` prints for this state.
    pub const fn flag(&self) -> char {
        match self {
            Self::Current => '>',
            Self::Applied => '+',
            Self::Unapplied => '-',
            Self::Hidden => '!',
        }
    }
}

/// A single patch row within a [Series].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatchRecord {
    /// The name of the patch, unique within one series snapshot.
    pub name: String,
    /// The state of the patch.
    pub state: PatchState,
    /// The raw empty flag, passed through for display. Any non-space
    /// character marks the patch as introducing no changes.
    pub empty_flag: char,
    /// Whether this patch is the marked patch of the viewing context.
    pub marked: bool,
    /// The commit-message summary line of the patch.
    pub description: String,
}

impl PatchRecord {
    /// Parses a single `stg series` line of the form
    /// `<empty-flag><state-flag> <name> # <description>`.
    ///
    /// The single space between the flag pair and the name is accepted but
    /// not required. Records parse unmarked; the caller-owned mark is applied
    /// by [Series::parse_lines].
    ///
    /// ## Returns
    /// - `Ok(record)` - The parsed patch row.
    /// - `Err(_)` - [SgError::MalformedLine] if the line does not match the
    ///   format, or [SgError::UnknownState] for an unrecognized state flag.
    pub fn parse(line: &str) -> SgResult<Self> {
        let malformed = || SgError::MalformedLine(line.to_string());

        let mut chars = line.chars();
        let empty_flag = chars.next().ok_or_else(malformed)?;
        let state_flag = chars.next().ok_or_else(malformed)?;

        let rest = chars.as_str();
        let rest = rest.strip_prefix(' ').unwrap_or(rest);
        let (name, description) = rest.split_once(" # ").ok_or_else(malformed)?;
        if name.is_empty() || name.contains(' ') {
            return Err(malformed());
        }

        Ok(Self {
            name: name.to_string(),
            state: PatchState::from_flag(state_flag)?,
            empty_flag,
            marked: false,
            description: description.to_string(),
        })
    }

    /// Whether the patch introduces no content changes.
    pub fn is_empty(&self) -> bool {
        self.empty_flag != ' '
    }
}

/// An ordered snapshot of the patch stack, rebuilt in full on every refresh.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Series {
    /// The patches, in stack order.
    pub patches: Vec<PatchRecord>,
}

impl Series {
    /// Lazily parses raw `stg series` output, yielding records in input order
    /// and applying the caller-owned mark to the matching name. Empty lines
    /// are discarded.
    pub fn parse_lines<'a>(
        raw: &'a str,
        marked: Option<&'a str>,
    ) -> impl Iterator<Item = SgResult<PatchRecord>> + 'a {
        raw.lines().filter(|line| !line.is_empty()).map(move |line| {
            PatchRecord::parse(line).map(|mut record| {
                record.marked = marked == Some(record.name.as_str());
                record
            })
        })
    }

    /// Parses a full series snapshot, stopping at the first malformed line or
    /// unknown state flag. An empty input yields an empty series.
    ///
    /// Duplicate names and multiple `Current` rows are passed through as-is;
    /// the parser classifies, it does not validate the stack.
    pub fn parse(raw: &str, marked: Option<&str>) -> SgResult<Self> {
        let patches = Self::parse_lines(raw, marked).collect::<SgResult<Vec<_>>>()?;
        Ok(Self { patches })
    }

    /// Gets a patch by name from the series.
    ///
    /// ## Takes
    /// - `name` - The name of the patch to get.
    ///
    /// ## Returns
    /// - `Some(record)` - The patch row.
    /// - `None` - The patch by the name of `name` was not found.
    pub fn get(&self, name: &str) -> Option<&PatchRecord> {
        self.patches.iter().find(|patch| patch.name == name)
    }

    /// Returns the marked patch record for the given mark. A stale mark,
    /// naming a patch that is no longer in the series, yields [None].
    pub fn marked_record(&self, marked: Option<&str>) -> Option<&PatchRecord> {
        marked.and_then(|name| self.get(name))
    }

    /// Returns the current patch, or [None] if no patch is applied.
    pub fn current(&self) -> Option<&PatchRecord> {
        self.patches
            .iter()
            .find(|patch| patch.state == PatchState::Current)
    }

    /// Whether the series holds no patches.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{PatchRecord, PatchState, Series};
    use crate::errors::SgError;

    #[test]
    fn parse_applied_line() {
        let record = PatchRecord::parse(" +patch-a # add foo").unwrap();

        assert_eq!(record.name, "patch-a");
        assert_eq!(record.state, PatchState::Applied);
        assert!(!record.is_empty());
        assert!(!record.marked);
        assert_eq!(record.description, "add foo");
    }

    #[test]
    fn parse_line_with_flag_separator() {
        let record = PatchRecord::parse("0+ patch-b # tweak bar").unwrap();

        assert_eq!(record.name, "patch-b");
        assert_eq!(record.state, PatchState::Applied);
        assert!(record.is_empty());
        assert_eq!(record.description, "tweak bar");
    }

    #[test]
    fn parse_current_and_marked() {
        let series =
            Series::parse("*>current-fix # fix the thing", Some("current-fix")).unwrap();
        let record = &series.patches[0];

        assert_eq!(record.name, "current-fix");
        assert_eq!(record.state, PatchState::Current);
        assert!(record.is_empty());
        assert!(record.marked);
        assert_eq!(record.description, "fix the thing");
    }

    #[test]
    fn unknown_state_flag_is_fatal() {
        let err = PatchRecord::parse("?X bogus # x").unwrap_err();
        assert!(matches!(err, SgError::UnknownState('X')));
    }

    #[test]
    fn malformed_line_without_separator() {
        let err = PatchRecord::parse(" + patch-a no separator").unwrap_err();
        assert!(matches!(err, SgError::MalformedLine(_)));
    }

    #[test]
    fn malformed_line_with_space_in_name() {
        let err = PatchRecord::parse(" + two words # desc").unwrap_err();
        assert!(matches!(err, SgError::MalformedLine(_)));
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = Series::parse("", None).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn blank_lines_are_discarded() {
        let raw = "\n + a # one\n\n - b # two\n";
        let series = Series::parse(raw, None).unwrap();
        assert_eq!(series.patches.len(), 2);
    }

    #[test]
    fn input_order_is_preserved() {
        let raw = " + a # one\n > b # two\n - c # three\n ! d # four";
        let series = Series::parse(raw, None).unwrap();

        let names = series
            .patches
            .iter()
            .map(|patch| patch.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["a", "b", "c", "d"]);
        assert_eq!(series.current().unwrap().name, "b");
    }

    #[test]
    fn first_error_aborts_the_series() {
        let raw = " + a # one\nbroken\n + b # two";
        let err = Series::parse(raw, None).unwrap_err();
        assert!(matches!(err, SgError::MalformedLine(line) if line == "broken"));
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = " > a # one\n - b # two";
        assert_eq!(
            Series::parse(raw, Some("b")).unwrap(),
            Series::parse(raw, Some("b")).unwrap()
        );
    }

    #[test]
    fn mark_follows_the_parameter_only() {
        let raw = " + a # one\n - b # two";

        let marked = Series::parse(raw, Some("b")).unwrap();
        assert!(!marked.patches[0].marked);
        assert!(marked.patches[1].marked);

        let unmarked = Series::parse(raw, None).unwrap();
        assert!(unmarked.patches.iter().all(|patch| !patch.marked));
    }

    #[test]
    fn lookup_by_name() {
        let series = Series::parse(" + a # one\n - b # two", None).unwrap();

        assert_eq!(series.get("b").unwrap().name, "b");
        assert!(series.get("missing").is_none());
    }

    #[test]
    fn stale_mark_yields_no_record() {
        let series = Series::parse(" + a # one\n - b # two", Some("gone")).unwrap();

        assert!(series.marked_record(Some("gone")).is_none());
        assert_eq!(series.marked_record(Some("b")).unwrap().name, "b");
        assert!(series.marked_record(None).is_none());
    }

    #[test]
    fn duplicate_names_and_states_pass_through() {
        // The parser classifies rows; stack-level validation is left to `stg`.
        let raw = " > a # one\n > a # two";
        let series = Series::parse(raw, None).unwrap();
        assert_eq!(series.patches.len(), 2);
    }

    #[test]
    fn description_may_contain_the_separator() {
        let record = PatchRecord::parse(" + a # fix # 12").unwrap();
        assert_eq!(record.description, "fix # 12");
    }
}
