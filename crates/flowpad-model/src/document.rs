//! Serializable diagram documents
//!
//! The wire format accepted by the import path. Deliberately lenient:
//! records carry raw strings and numbers, and the importer decides what to
//! do with values it does not recognize (warnings, not parse failures).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loadable diagram document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Element records in paint order
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

impl Document {
    /// Empty document with a name
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            elements: Vec::new(),
        }
    }
}

/// One element record in a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Stable id within the document, if the producer assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Namespaced type tag, e.g. `flow:Task`
    #[serde(rename = "type")]
    pub type_name: String,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width; the importer falls back to the type default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Height; the importer falls back to the type default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw suitability value; validated by the importer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitable: Option<u32>,
    /// Free-form semantic attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl ElementRecord {
    /// Minimal record with a type tag and position
    #[inline]
    #[must_use]
    pub fn new(type_name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: None,
            type_name: type_name.into(),
            x,
            y,
            width: None,
            height: None,
            name: None,
            suitable: None,
            attributes: BTreeMap::new(),
        }
    }
}
