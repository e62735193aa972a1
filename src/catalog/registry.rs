use std::collections::HashMap;
use tracing::debug;
use crate::catalog::{Catalog, Medium};
use crate::core::library::{LibraryError, LibraryResult};

// InMemoryCatalog keeps the media stock in insertion order so that listing is stable.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    media: Vec<Medium>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    pub fn new(media: Vec<Medium>) -> LibraryResult<Self> {
        let mut catalog = Self::default();
        for medium in media {
            catalog.add_medium(medium)?;
        }
        Ok(catalog)
    }

    pub fn add_medium(&mut self, medium: Medium) -> LibraryResult<()> {
        if self.index.contains_key(medium.medium_id.as_str()) {
            return Err(LibraryError::validation(format!("medium {} already in stock",
                                                        medium.medium_id).as_str(), Some("409".to_string())));
        }
        debug!(medium = %medium.medium_id, kind = %medium.kind, "medium added to stock");
        self.index.insert(medium.medium_id.to_string(), self.media.len());
        self.media.push(medium);
        Ok(())
    }
}

impl Catalog for InMemoryCatalog {
    fn contains_medium(&self, medium: &Medium) -> bool {
        self.index.get(medium.medium_id.as_str())
            .and_then(|ndx| self.media.get(*ndx))
            .map_or(false, |m| m == medium)
    }

    fn list_media(&self) -> Vec<Medium> {
        self.media.clone()
    }

    fn find_medium_by_id(&self, medium_id: &str) -> Option<Medium> {
        self.index.get(medium_id).and_then(|ndx| self.media.get(*ndx)).cloned()
    }
}
