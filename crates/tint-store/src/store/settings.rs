//! Document-wide settings: theme, collection name, background preview.

use crate::model::{BackgroundPreview, Theme};

use super::PaletteStore;

impl PaletteStore {
    pub fn set_theme(&mut self, theme: Theme) {
        let mut next = self.draft();
        next.theme = theme;
        self.commit(next, "set_theme");
    }

    /// Name used for the Figma variable collection on export.
    pub fn set_collection_name(&mut self, name: &str) {
        let mut next = self.draft();
        next.collection_name = name.to_string();
        self.commit(next, "set_collection_name");
    }

    pub fn set_background_preview(&mut self, preview: BackgroundPreview) {
        let mut next = self.draft();
        next.background_preview = preview;
        self.commit(next, "set_background_preview");
    }

    /// Figma variable collection JSON for every palette in the store.
    pub fn export_figma(&self) -> Result<String, tint_common::StoreError> {
        crate::figma::export_to_figma_json(&self.state.palettes, &self.state.collection_name)
    }
}
