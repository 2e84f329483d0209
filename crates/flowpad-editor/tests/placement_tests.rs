use flowpad_editor::auto_place::GridAutoPlace;
use flowpad_editor::canvas::Canvas;
use flowpad_editor::config::EditorConfig;
use flowpad_editor::error::ServiceError;
use flowpad_editor::events::EditorEvents;
use flowpad_editor::services::AutoPlace;
use flowpad_model::{Bounds, BusinessObject, Element, Point, Shape, Size, TypeName};
use proptest::prelude::*;
use std::sync::Arc;

fn task_shape() -> Shape {
    Shape::new(
        TypeName::task(),
        Bounds::from_parts(0.0, 0.0, 100.0, 80.0),
        BusinessObject::new(TypeName::task()),
    )
}

fn harness(gap: f32) -> (Arc<Canvas>, GridAutoPlace) {
    let config = EditorConfig::new().with_placement_gap(gap);
    let canvas = Arc::new(Canvas::new(Size::new(800.0, 600.0)));
    let events = Arc::new(EditorEvents::new());
    let auto_place = GridAutoPlace::new(canvas.clone(), events, &config);
    (canvas, auto_place)
}

fn commit_anchor(canvas: &Canvas, at: Point) -> Element {
    let id = canvas.commit(task_shape().placed_at(at)).unwrap();
    canvas.element(id).unwrap()
}

proptest! {
    #[test]
    fn prop_placement_stays_clear_of_the_anchor(
        anchor_x in -200.0..200.0f32,
        anchor_y in -200.0..200.0f32,
        gap in 1.0..120.0f32,
        appended in 1..6usize,
    ) {
        let (canvas, auto_place) = harness(gap);
        let anchor = commit_anchor(&canvas, Point::new(anchor_x, anchor_y));

        for _ in 0..appended {
            let id = auto_place.append(&anchor, task_shape()).unwrap();
            let placed = canvas.element(id).unwrap();

            // Always strictly right of the anchor, never overlapping it.
            prop_assert!(placed.bounds().origin.x > anchor.bounds().right());
            prop_assert!(!placed.bounds().intersects(&anchor.bounds()));
        }
    }

    #[test]
    fn prop_appended_shapes_never_overlap(
        count in 2..8usize,
        gap in 1.0..60.0f32,
    ) {
        let (canvas, auto_place) = harness(gap);
        let anchor = commit_anchor(&canvas, Point::new(0.0, 0.0));

        for _ in 0..count {
            auto_place.append(&anchor, task_shape()).unwrap();
        }

        let elements = canvas.elements();
        for (i, a) in elements.iter().enumerate() {
            for b in elements.iter().skip(i + 1) {
                prop_assert!(!a.bounds().intersects(&b.bounds()));
            }
        }
    }

    #[test]
    fn prop_placement_is_deterministic(count in 1..6usize) {
        let run = || {
            let (canvas, auto_place) = harness(50.0);
            let anchor = commit_anchor(&canvas, Point::new(10.0, 20.0));
            (0..count)
                .map(|_| {
                    let id = auto_place.append(&anchor, task_shape()).unwrap();
                    canvas.element(id).unwrap().bounds().origin
                })
                .collect::<Vec<_>>()
        };

        prop_assert_eq!(run(), run());
    }
}

#[test]
fn test_exhausted_column_is_a_placement_failure() {
    let (canvas, auto_place) = harness(50.0);
    let anchor = commit_anchor(&canvas, Point::new(0.0, 0.0));

    // Fill every probe slot in the column.
    for _ in 0..64 {
        auto_place.append(&anchor, task_shape()).unwrap();
    }

    assert!(matches!(
        auto_place.append(&anchor, task_shape()),
        Err(ServiceError::NoFreeSlot { .. })
    ));
}
