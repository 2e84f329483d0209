//! Standard factories for the built-in `flow:` vocabulary

use crate::error::ServiceError;
use crate::services::{BusinessObjectFactory, ElementFactory};
use flowpad_model::{Bounds, BusinessObject, Point, Shape, ShapeSpec, Size, TypeName};
use std::collections::HashMap;

/// Business-object factory backed by a known-type table
#[derive(Debug)]
pub struct StandardBusinessObjectFactory {
    known: Vec<TypeName>,
}

impl StandardBusinessObjectFactory {
    /// Factory knowing the built-in vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self {
            known: vec![TypeName::task(), TypeName::event(), TypeName::gateway()],
        }
    }

    /// With an additional known type
    #[must_use]
    pub fn with_type(mut self, type_name: TypeName) -> Self {
        self.known.push(type_name);
        self
    }
}

impl Default for StandardBusinessObjectFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessObjectFactory for StandardBusinessObjectFactory {
    fn create(&self, type_name: &str) -> Result<BusinessObject, ServiceError> {
        let parsed: TypeName = type_name.parse()?;
        if !self.known.contains(&parsed) {
            return Err(ServiceError::UnknownElementType(type_name.to_string()));
        }
        tracing::debug!(element_type = type_name, "business object created");
        Ok(BusinessObject::new(parsed))
    }
}

/// Element factory assigning per-type default extents
///
/// Shapes come out unplaced (origin at zero); placement is the caller's
/// concern, whether auto-place or a drag session.
#[derive(Debug)]
pub struct StandardElementFactory {
    extents: HashMap<TypeName, Size>,
}

impl StandardElementFactory {
    /// Factory with the built-in default extents
    #[must_use]
    pub fn new() -> Self {
        let mut extents = HashMap::new();
        extents.insert(TypeName::task(), Size::new(100.0, 80.0));
        extents.insert(TypeName::event(), Size::new(36.0, 36.0));
        extents.insert(TypeName::gateway(), Size::new(50.0, 50.0));
        Self { extents }
    }

    /// With a default extent for an additional type
    #[must_use]
    pub fn with_extent(mut self, type_name: TypeName, size: Size) -> Self {
        self.extents.insert(type_name, size);
        self
    }
}

impl Default for StandardElementFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementFactory for StandardElementFactory {
    fn create_shape(&self, spec: ShapeSpec) -> Result<Shape, ServiceError> {
        let size = self
            .extents
            .get(&spec.type_name)
            .copied()
            .ok_or_else(|| ServiceError::UnknownElementType(spec.type_name.to_string()))?;
        Ok(Shape::new(
            spec.type_name,
            Bounds::new(Point::default(), size),
            spec.business_object,
        ))
    }
}
