//! Public landing page state.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use content::{PublicContent, StoreError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub content: PublicContent,
    pub loaded: bool,
    /// Collections that could not be read; shown as a quiet note.
    pub unreadable: Vec<String>,
}

impl SiteState {
    pub fn loaded_from(content: PublicContent, errors: &[StoreError]) -> Self {
        let unreadable = errors.iter().map(ToString::to_string).collect();
        Self { content, loaded: true, unreadable }
    }
}
