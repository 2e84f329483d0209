//! Translation services

use crate::services::Translate;
use std::collections::HashMap;

/// Pass-through translation
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslate;

impl Translate for IdentityTranslate {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Table-backed translation with pass-through fallback
#[derive(Debug, Default)]
pub struct TableTranslate {
    table: HashMap<String, String>,
}

impl TableTranslate {
    /// Empty table; behaves like [`IdentityTranslate`] until filled
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With one translation
    #[inline]
    #[must_use]
    pub fn with_entry(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.table.insert(from.into(), to.into());
        self
    }
}

impl Translate for TableTranslate {
    fn translate(&self, text: &str) -> String {
        self.table
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_translates_known_strings_and_passes_through_rest() {
        let translate = TableTranslate::new().with_entry("Delete", "Löschen");
        assert_eq!(translate.translate("Delete"), "Löschen");
        assert_eq!(translate.translate("Rename"), "Rename");
    }
}
