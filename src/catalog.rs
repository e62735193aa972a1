use serde::{Deserialize, Serialize};
use crate::core::library::MediumKind;

pub mod registry;

// Medium abstracts one physical, borrowable unit of the media library. Two copies of the
// same title are different media with different identifiers.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Medium {
    pub medium_id: String,
    pub title: String,
    pub kind: MediumKind,
}

impl Medium {
    pub fn new(medium_id: &str, title: &str, kind: MediumKind) -> Self {
        Self {
            medium_id: medium_id.to_string(),
            title: title.to_string(),
            kind,
        }
    }
}

/// Read-only view on the media stock consulted by the ledger.
pub trait Catalog: Sync + Send {
    fn contains_medium(&self, medium: &Medium) -> bool;
    fn list_media(&self) -> Vec<Medium>;
    fn find_medium_by_id(&self, medium_id: &str) -> Option<Medium>;
}

#[cfg(test)]
mod tests {
    use crate::catalog::Medium;
    use crate::core::library::MediumKind;

    #[tokio::test]
    async fn test_should_build_medium() {
        let medium = Medium::new("CD1", "baz", MediumKind::Cd);
        assert_eq!("CD1", medium.medium_id.as_str());
        assert_eq!("baz", medium.title.as_str());
        assert_eq!(MediumKind::Cd, medium.kind);
    }
}
