//! Contains the formatting logic for the [SgContext] struct.

use super::SgContext;
use crate::errors::SgResult;

impl SgContext {
    /// Fetches the series and prints the styled view to stdout. The view is
    /// rendered into a buffer first, so a parse failure prints nothing.
    pub fn print_series(&self) -> SgResult<()> {
        let series = self.load_series()?;

        let mut buf = String::new();
        series.write_series(&mut buf)?;
        print!("{}", buf);

        Ok(())
    }
}
