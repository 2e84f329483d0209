//! Interactive create sessions
//!
//! Headless stand-in for the host drag machinery. `start` takes
//! ownership of the shape and parks it as the pending session; a driver
//! later drops it on the canvas with [`InteractiveCreate::complete_at`]
//! or discards it with [`InteractiveCreate::cancel`]. One session at a
//! time: there is a single pointer.

use crate::canvas::Canvas;
use crate::error::ServiceError;
use crate::events::{EditorEvents, ShapeAddedEvent};
use crate::services::CreateSession;
use flowpad_model::{Element, ElementId, Point, PointerEvent, Shape};
use parking_lot::Mutex;
use std::sync::Arc;

/// A create session waiting for a drop
#[derive(Debug, Clone)]
pub struct PendingCreate {
    /// Drag origin: the pointer position at start
    pub origin: Point,
    /// Shape being carried
    pub shape: Shape,
    /// Anchor the session was started from
    pub anchor: Option<ElementId>,
}

/// Single-slot interactive create service
pub struct InteractiveCreate {
    canvas: Arc<Canvas>,
    events: Arc<EditorEvents>,
    pending: Mutex<Option<PendingCreate>>,
}

impl InteractiveCreate {
    /// Create service over a canvas
    #[must_use]
    pub fn new(canvas: Arc<Canvas>, events: Arc<EditorEvents>) -> Self {
        Self {
            canvas,
            events,
            pending: Mutex::new(None),
        }
    }

    /// Current pending session, if any
    #[must_use]
    pub fn pending(&self) -> Option<PendingCreate> {
        self.pending.lock().clone()
    }

    /// Drop the pending shape at a position, committing it
    ///
    /// # Errors
    /// Fails when no session is pending or the canvas is detached.
    pub fn complete_at(&self, position: Point) -> Result<ElementId, ServiceError> {
        let pending = self.pending.lock().take().ok_or(ServiceError::NoSession)?;
        let placed = pending.shape.placed_at(position);
        let type_name = placed.type_name().clone();
        let id = self.canvas.commit(placed)?;
        tracing::info!(element = %id, "create session completed");
        self.events.emit_shape_added(ShapeAddedEvent { id, type_name });
        Ok(id)
    }

    /// Discard the pending session, if any
    ///
    /// Returns whether a session was discarded.
    pub fn cancel(&self) -> bool {
        let discarded = self.pending.lock().take().is_some();
        if discarded {
            tracing::debug!("create session cancelled");
        }
        discarded
    }
}

impl CreateSession for InteractiveCreate {
    fn start(
        &self,
        event: &PointerEvent,
        shape: Shape,
        anchor: Option<&Element>,
    ) -> Result<(), ServiceError> {
        let mut slot = self.pending.lock();
        if slot.is_some() {
            return Err(ServiceError::SessionPending);
        }
        tracing::info!(element_type = %shape.type_name(), "create session started");
        *slot = Some(PendingCreate {
            origin: event.position,
            shape,
            anchor: anchor.map(Element::id),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpad_model::{Bounds, BusinessObject, Size, TypeName};

    fn setup() -> (Arc<Canvas>, InteractiveCreate) {
        let canvas = Arc::new(Canvas::new(Size::new(800.0, 600.0)));
        let events = Arc::new(EditorEvents::new());
        let create = InteractiveCreate::new(canvas.clone(), events);
        (canvas, create)
    }

    fn task_shape() -> Shape {
        Shape::new(
            TypeName::task(),
            Bounds::from_parts(0.0, 0.0, 100.0, 80.0),
            BusinessObject::new(TypeName::task()),
        )
    }

    #[test]
    fn start_then_complete_commits_at_drop_point() {
        let (canvas, create) = setup();
        create
            .start(&PointerEvent::at(30.0, 40.0), task_shape(), None)
            .unwrap();
        assert_eq!(create.pending().unwrap().origin, Point::new(30.0, 40.0));

        let id = create.complete_at(Point::new(200.0, 120.0)).unwrap();
        let element = canvas.element(id).unwrap();
        assert_eq!(element.bounds().origin, Point::new(200.0, 120.0));
        assert!(create.pending().is_none());
    }

    #[test]
    fn second_start_while_pending_fails() {
        let (_canvas, create) = setup();
        create
            .start(&PointerEvent::default(), task_shape(), None)
            .unwrap();

        assert!(matches!(
            create.start(&PointerEvent::default(), task_shape(), None),
            Err(ServiceError::SessionPending)
        ));
    }

    #[test]
    fn complete_without_session_fails() {
        let (_canvas, create) = setup();
        assert!(matches!(
            create.complete_at(Point::default()),
            Err(ServiceError::NoSession)
        ));
    }

    #[test]
    fn cancel_discards_the_pending_shape() {
        let (canvas, create) = setup();
        create
            .start(&PointerEvent::default(), task_shape(), None)
            .unwrap();

        assert!(create.cancel());
        assert!(!create.cancel());
        assert!(canvas.is_empty());
    }
}
