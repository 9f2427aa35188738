//! The "maybe object, maybe reference" slot (§9 design note).
//!
//! A field that can hold either a fully inlined child object or just its
//! `ga4gh:`-prefixed identifier string. Modeled as a tagged sum rather than a
//! nullable pair of fields, as the design notes require.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Inlined(Box<T>),
    Referenced(String),
}

impl<T> Ref<T> {
    pub fn inlined(value: T) -> Self {
        Ref::Inlined(Box::new(value))
    }

    pub fn referenced(id: impl Into<String>) -> Self {
        Ref::Referenced(id.into())
    }

    pub fn as_inlined(&self) -> Option<&T> {
        match self {
            Ref::Inlined(v) => Some(v),
            Ref::Referenced(_) => None,
        }
    }

    pub fn into_inlined(self) -> Option<T> {
        match self {
            Ref::Inlined(v) => Some(*v),
            Ref::Referenced(_) => None,
        }
    }

    pub fn as_referenced(&self) -> Option<&str> {
        match self {
            Ref::Inlined(_) => None,
            Ref::Referenced(id) => Some(id),
        }
    }
}

impl<T> From<T> for Ref<T> {
    fn from(value: T) -> Self {
        Ref::inlined(value)
    }
}
