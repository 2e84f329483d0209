//! Shapes and committed diagram elements
//!
//! A [`Shape`] is the transient, drawable wrapper around a business object:
//! it exists from factory creation until the canvas commits it. Committing
//! turns it into an [`Element`], at which point the canvas owns the data
//! and only shared access remains.

use crate::business::{BusinessObject, TypeName};
use crate::geometry::{Bounds, Point};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique element identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub Ulid);

impl ElementId {
    /// Generate new element ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input to the element factory
#[derive(Debug, Clone)]
pub struct ShapeSpec {
    /// Element type tag for the new shape
    pub type_name: TypeName,
    /// Business object the shape will wrap
    pub business_object: BusinessObject,
}

impl ShapeSpec {
    /// Create a shape spec
    #[inline]
    #[must_use]
    pub fn new(type_name: TypeName, business_object: BusinessObject) -> Self {
        Self {
            type_name,
            business_object,
        }
    }
}

/// Drawable wrapper around a business object, unplaced until committed
#[derive(Debug, Clone)]
pub struct Shape {
    id: ElementId,
    type_name: TypeName,
    bounds: Bounds,
    business_object: BusinessObject,
}

impl Shape {
    /// Create a shape wrapping a business object
    #[inline]
    #[must_use]
    pub fn new(type_name: TypeName, bounds: Bounds, business_object: BusinessObject) -> Self {
        Self {
            id: ElementId::new(),
            type_name,
            bounds,
            business_object,
        }
    }

    /// Element identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Element type tag
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Current bounds
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Wrapped business object
    #[inline]
    #[must_use]
    pub fn business_object(&self) -> &BusinessObject {
        &self.business_object
    }

    /// Reposition before commit, keeping the extent
    #[inline]
    #[must_use]
    pub fn placed_at(mut self, origin: Point) -> Self {
        self.bounds = self.bounds.at(origin);
        self
    }

    /// Replace the bounds entirely, e.g. when a document record carries
    /// its own extent
    #[inline]
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Convert into a committed element
    ///
    /// Called by the canvas on commit; the element keeps the shape's id.
    #[inline]
    #[must_use]
    pub fn into_element(self) -> Element {
        Element {
            id: self.id,
            type_name: self.type_name,
            bounds: self.bounds,
            business_object: self.business_object,
        }
    }
}

/// Committed diagram node owned by the canvas
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    id: ElementId,
    #[serde(rename = "type")]
    type_name: TypeName,
    bounds: Bounds,
    business_object: BusinessObject,
}

impl Element {
    /// Element identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Element type tag
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Bounds on the canvas
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Wrapped business object
    #[inline]
    #[must_use]
    pub fn business_object(&self) -> &BusinessObject {
        &self.business_object
    }
}
