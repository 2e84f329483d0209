//! Collaborator contracts between the editor runtime and pad extensions
//!
//! Pad providers hold these as trait objects and never see concrete
//! runtime types. All services are shared and reentrant: methods take
//! `&self` and may be called from any entry action at any time.

use crate::error::ServiceError;
use flowpad_model::{BusinessObject, Element, ElementId, PointerEvent, Shape, ShapeSpec};

/// Constructs typed business objects
pub trait BusinessObjectFactory: Send + Sync {
    /// Create a business object for a namespaced type tag
    ///
    /// # Errors
    /// Fails when the tag is malformed or unknown to the factory.
    fn create(&self, type_name: &str) -> Result<BusinessObject, ServiceError>;
}

/// Constructs drawable shapes from specs
pub trait ElementFactory: Send + Sync {
    /// Create an unplaced shape wrapping the spec's business object
    ///
    /// # Errors
    /// Fails when the spec's type tag has no registered default extent.
    fn create_shape(&self, spec: ShapeSpec) -> Result<Shape, ServiceError>;
}

/// Strategy that places and commits a shape next to an anchor
///
/// This capability is optional: hosts may not construct it at all, and
/// callers resolve it once into an `Option<Arc<dyn AutoPlace>>`.
pub trait AutoPlace: Send + Sync {
    /// Place `shape` adjacent to `anchor` and commit it
    ///
    /// # Errors
    /// Fails when the canvas is detached or probing finds no free slot.
    fn append(&self, anchor: &Element, shape: Shape) -> Result<ElementId, ServiceError>;
}

/// Starts an interactive create (drag) session
pub trait CreateSession: Send + Sync {
    /// Hand `shape` to the host drag machinery
    ///
    /// Synchronous: the session is live when this returns. Ownership of
    /// the shape transfers to the session, so the caller's responsibility
    /// ends here.
    ///
    /// # Errors
    /// Fails when a session is already pending.
    fn start(
        &self,
        event: &PointerEvent,
        shape: Shape,
        anchor: Option<&Element>,
    ) -> Result<(), ServiceError>;
}

/// Translates user-visible strings
pub trait Translate: Send + Sync {
    /// Translate a display string, returning it unchanged when no
    /// translation is registered
    fn translate(&self, text: &str) -> String;
}
