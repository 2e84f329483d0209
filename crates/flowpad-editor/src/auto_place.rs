//! Automatic shape placement

use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::error::ServiceError;
use crate::events::{EditorEvents, ShapeAddedEvent};
use crate::services::AutoPlace;
use flowpad_model::{Element, ElementId, Point, Shape};
use std::sync::Arc;

/// Probe attempts before placement gives up
const MAX_PROBES: usize = 64;

/// Deterministic auto-place: right of the anchor, probing downward
///
/// The first candidate sits `placement_gap` to the right of the anchor,
/// vertically centered on it. While a candidate overlaps committed
/// content the probe moves down one shape height plus `placement_step`.
/// The probe is bounded; a full column is a placement failure.
pub struct GridAutoPlace {
    canvas: Arc<Canvas>,
    events: Arc<EditorEvents>,
    gap: f32,
    step: f32,
}

impl GridAutoPlace {
    /// Auto-place over a canvas, tuned by the editor config
    #[must_use]
    pub fn new(canvas: Arc<Canvas>, events: Arc<EditorEvents>, config: &EditorConfig) -> Self {
        Self {
            canvas,
            events,
            gap: config.placement_gap,
            step: config.placement_step,
        }
    }
}

impl AutoPlace for GridAutoPlace {
    fn append(&self, anchor: &Element, shape: Shape) -> Result<ElementId, ServiceError> {
        let anchor_bounds = anchor.bounds();
        let extent = shape.bounds().size;
        let mut origin = Point::new(
            anchor_bounds.right() + self.gap,
            anchor_bounds.center().y - extent.height / 2.0,
        );

        for _ in 0..MAX_PROBES {
            let target = shape.bounds().at(origin);
            if !self.canvas.is_occupied(&target) {
                let placed = shape.placed_at(origin);
                let type_name = placed.type_name().clone();
                let id = self.canvas.commit(placed)?;
                tracing::info!(anchor = %anchor.id(), element = %id, "auto-placed shape");
                self.events.emit_shape_added(ShapeAddedEvent { id, type_name });
                return Ok(id);
            }
            origin.y += extent.height + self.step;
        }
        Err(ServiceError::NoFreeSlot {
            anchor: anchor.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpad_model::{Bounds, BusinessObject, Size, TypeName};

    fn setup() -> (Arc<Canvas>, GridAutoPlace) {
        let canvas = Arc::new(Canvas::new(Size::new(800.0, 600.0)));
        let events = Arc::new(EditorEvents::new());
        let auto_place = GridAutoPlace::new(canvas.clone(), events, &EditorConfig::default());
        (canvas, auto_place)
    }

    fn task_shape() -> Shape {
        Shape::new(
            TypeName::task(),
            Bounds::from_parts(0.0, 0.0, 100.0, 80.0),
            BusinessObject::new(TypeName::task()),
        )
    }

    fn anchor(canvas: &Canvas) -> Element {
        let id = canvas
            .commit(task_shape().placed_at(Point::new(100.0, 100.0)))
            .unwrap();
        canvas.element(id).unwrap()
    }

    #[test]
    fn first_slot_is_right_of_anchor() {
        let (canvas, auto_place) = setup();
        let anchor = anchor(&canvas);

        let id = auto_place.append(&anchor, task_shape()).unwrap();
        let placed = canvas.element(id).unwrap();

        assert_eq!(placed.bounds().origin, Point::new(250.0, 100.0));
        assert!(!placed.bounds().intersects(&anchor.bounds()));
    }

    #[test]
    fn occupied_slot_probes_downward() {
        let (canvas, auto_place) = setup();
        let anchor = anchor(&canvas);

        let first = auto_place.append(&anchor, task_shape()).unwrap();
        let second = auto_place.append(&anchor, task_shape()).unwrap();

        let first = canvas.element(first).unwrap();
        let second = canvas.element(second).unwrap();
        assert_eq!(second.bounds().origin.x, first.bounds().origin.x);
        assert_eq!(second.bounds().origin.y, first.bounds().origin.y + 100.0);
        assert!(!second.bounds().intersects(&first.bounds()));
    }

    #[test]
    fn detached_canvas_fails_placement() {
        let (canvas, auto_place) = setup();
        let anchor = anchor(&canvas);
        canvas.destroy();

        assert!(matches!(
            auto_place.append(&anchor, task_shape()),
            Err(ServiceError::CanvasDetached)
        ));
    }
}
