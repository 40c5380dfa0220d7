use log::{debug, warn};

use crate::catalog::DemoCatalog;
use crate::error::{Error, Result};

/// Index of the chosen catalog entry. Always in range for the catalog it was built against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the selection; out-of-range indices leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] if `index >= catalog.len()`.
    pub fn select(&mut self, index: usize, catalog: &DemoCatalog) -> Result<()> {
        if index >= catalog.len() {
            warn!("Ignoring selection {index}, catalog has {} entries", catalog.len());
            return Err(Error::invalid_selection(index, catalog.len()));
        }

        debug!("Selected demo {index}");
        self.index = index;
        Ok(())
    }

    /// Command previewed while idle.
    pub fn preview<'a>(&self, catalog: &'a DemoCatalog) -> &'a str {
        catalog
            .get(self.index)
            .map(|entry| entry.command.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_entry() {
        let catalog = DemoCatalog::default();
        let selection = Selection::default();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.preview(&catalog), "gocat connect google.com 80");
    }

    #[test]
    fn test_select_every_entry_previews_its_command() {
        let catalog = DemoCatalog::default();
        let mut selection = Selection::default();

        for (i, entry) in catalog.iter().enumerate() {
            selection.select(i, &catalog).unwrap();
            assert_eq!(selection.preview(&catalog), entry.command);
        }
    }

    #[test]
    fn test_out_of_range_leaves_selection() {
        let catalog = DemoCatalog::default();
        let mut selection = Selection::default();
        selection.select(2, &catalog).unwrap();

        let result = selection.select(catalog.len(), &catalog);
        assert!(matches!(
            result,
            Err(Error::InvalidSelection { index: 4, len: 4 })
        ));
        assert_eq!(selection.index(), 2);
    }
}
