//! Asset keys.
//!
//! Every generated asset is addressed by `{category}/{id}`. Items and
//! blocks are separate namespaces, so `item/copper_thing` and
//! `block/copper_thing` are distinct keys and never collide.

use crate::core::types::{EntityCategory, Slug};
use serde::{Serialize, Serializer};
use std::fmt;

/// Namespaced identity of one generated asset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey {
    pub category: EntityCategory,
    pub id: Slug,
}

impl AssetKey {
    pub fn new(category: EntityCategory, id: Slug) -> Self {
        Self { category, id }
    }

    pub fn item(id: Slug) -> Self {
        Self::new(EntityCategory::Item, id)
    }

    pub fn block(id: Slug) -> Self {
        Self::new(EntityCategory::Block, id)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.id)
    }
}

impl Serialize for AssetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
