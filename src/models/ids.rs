// file: src/models/ids.rs
// description: deterministic identifiers for documents and derived entities
// reference: https://docs.rs/uuid

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_0a52_93d4_4b7e_a1c2_5e8d_2f40_b913);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl DocumentId {
    pub fn derive(source: &str, relative_path: &str) -> Self {
        let name = format!("{source}:{relative_path}");
        Self(Uuid::new_v5(&NAMESPACE, name.as_bytes()))
    }
}

impl EntityId {
    /// Id of the entity of `type_name` derived from `parent`.
    pub fn derive(parent: DocumentId, type_name: &str) -> Self {
        let name = format!("{} >>> {}", parent, type_name);
        Self(Uuid::new_v5(&NAMESPACE, name.as_bytes()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_depends_on_type() {
        let doc = DocumentId::derive("courses", "index.md");
        assert_ne!(
            EntityId::derive(doc, "MarkdownModule"),
            EntityId::derive(doc, "MarkdownCourse")
        );
        assert_eq!(
            EntityId::derive(doc, "MarkdownModule"),
            EntityId::derive(doc, "MarkdownModule")
        );
    }
}
