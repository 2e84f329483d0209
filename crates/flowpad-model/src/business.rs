//! Business objects and element type tags
//!
//! A business object is the domain-facing record behind a diagram element.
//! The drawing layer only knows bounds and ids; everything semantic (the
//! namespaced type tag, labels, suitability, free-form attributes) lives
//! here.

use crate::score::SuitabilityScore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The task element type appended by the context pad
pub const TASK_TYPE: &str = "flow:Task";
/// Start/end event element type
pub const EVENT_TYPE: &str = "flow:Event";
/// Exclusive gateway element type
pub const GATEWAY_TYPE: &str = "flow:Gateway";

/// Namespaced element type tag, e.g. `flow:Task`
///
/// The namespace separates host-defined element kinds from extension
/// vocabularies sharing one diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Built-in task type
    #[inline]
    #[must_use]
    pub fn task() -> Self {
        Self(TASK_TYPE.to_string())
    }

    /// Built-in event type
    #[inline]
    #[must_use]
    pub fn event() -> Self {
        Self(EVENT_TYPE.to_string())
    }

    /// Built-in gateway type
    #[inline]
    #[must_use]
    pub fn gateway() -> Self {
        Self(GATEWAY_TYPE.to_string())
    }

    /// Full tag as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace prefix (before the colon)
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or("", |(ns, _)| ns)
    }

    /// Local part (after the colon)
    #[inline]
    #[must_use]
    pub fn local(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(_, l)| l)
    }
}

impl FromStr for TypeName {
    type Err = TypeNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((ns, local))
                if !ns.is_empty() && !local.is_empty() && !s.contains(char::is_whitespace) =>
            {
                Ok(Self(s.to_string()))
            }
            _ => Err(TypeNameError(s.to_string())),
        }
    }
}

impl TryFrom<String> for TypeName {
    type Error = TypeNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invalid element type tag
#[derive(Debug, thiserror::Error)]
#[error("invalid element type tag `{0}`: expected `namespace:Local`")]
pub struct TypeNameError(pub String);

/// Domain record behind a diagram element
///
/// Constructed by the editor's business-object factory and consumed by the
/// shape that wraps it. The suitability score is attached with a consuming
/// builder before the wrap; once a shape owns the object there is only
/// shared access, so the score cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessObject {
    #[serde(rename = "type")]
    type_name: TypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suitable: Option<SuitabilityScore>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, serde_json::Value>,
}

impl BusinessObject {
    /// Create a business object with the given type tag
    #[inline]
    #[must_use]
    pub fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            name: None,
            suitable: None,
            attributes: BTreeMap::new(),
        }
    }

    /// With a display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With a suitability score
    #[inline]
    #[must_use]
    pub fn with_suitability(mut self, score: SuitabilityScore) -> Self {
        self.suitable = Some(score);
        self
    }

    /// With a semantic attribute
    #[inline]
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Type tag
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Display name, if set
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Suitability score, if attached
    #[inline]
    #[must_use]
    pub fn suitable(&self) -> Option<SuitabilityScore> {
        self.suitable
    }

    /// Look up a semantic attribute
    #[inline]
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// All semantic attributes
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_parses_namespaced_tags() {
        let name: TypeName = TASK_TYPE.parse().unwrap();
        assert_eq!(name.namespace(), "flow");
        assert_eq!(name.local(), "Task");
        assert_eq!(name.as_str(), "flow:Task");
    }

    #[test]
    fn type_name_rejects_malformed_tags() {
        assert!("Task".parse::<TypeName>().is_err());
        assert!(":Task".parse::<TypeName>().is_err());
        assert!("flow:".parse::<TypeName>().is_err());
        assert!("flow: Task".parse::<TypeName>().is_err());
    }

    #[test]
    fn suitability_sticks_once_attached() {
        let bo = BusinessObject::new(TASK_TYPE.parse().unwrap())
            .with_suitability(SuitabilityScore::High);
        assert_eq!(bo.suitable(), Some(SuitabilityScore::High));
    }

    #[test]
    fn serializes_suitability_as_number() {
        let bo = BusinessObject::new(TASK_TYPE.parse().unwrap())
            .with_suitability(SuitabilityScore::Average)
            .with_name("review order");
        let json = serde_json::to_value(&bo).unwrap();
        assert_eq!(json["type"], "flow:Task");
        assert_eq!(json["suitable"], 50);
        assert_eq!(json["name"], "review order");
    }
}
