use pagedex_types::{ItemKey, Keyed};
use serde::{Deserialize, Serialize};

/// Minimal cacheable record used across the integration tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rec {
    pub id: ItemKey,
    pub title: String,
}

impl Keyed for Rec {
    fn key(&self) -> ItemKey {
        self.id.clone()
    }
}

pub fn rec(id: impl Into<ItemKey>, title: &str) -> Rec {
    Rec {
        id: id.into(),
        title: title.to_string(),
    }
}
