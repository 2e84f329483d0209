//! Entry action handlers
//!
//! One handler struct per gesture, each holding exactly the collaborators
//! it needs. The click path is asynchronous: it waits out the delay policy,
//! then auto-places when the capability was resolved and otherwise degrades
//! to the drag-start path against the same event and anchor.

use crate::delay::DelayPolicy;
use flowpad_editor::{
    AutoPlace, BusinessObjectFactory, ClickAction, CreateSession, DragAction, ElementFactory,
    ServiceError,
};
use flowpad_model::{Element, PointerEvent, Shape, ShapeSpec, SuitabilityScore, TASK_TYPE};
use std::fmt;
use std::sync::Arc;

/// Build a task shape whose business object carries `score`.
///
/// The score is attached before the shape wraps the object, so committed
/// elements can never observe an unscored task from this path.
fn scored_task_shape(
    business_objects: &dyn BusinessObjectFactory,
    elements: &dyn ElementFactory,
    score: SuitabilityScore,
) -> Result<Shape, ServiceError> {
    let business_object = business_objects.create(TASK_TYPE)?.with_suitability(score);
    let type_name = business_object.type_name().clone();
    elements.create_shape(ShapeSpec::new(type_name, business_object))
}

/// Starts an interactive create session for a scored task
pub struct AppendTaskDragStart {
    score: SuitabilityScore,
    business_objects: Arc<dyn BusinessObjectFactory>,
    elements: Arc<dyn ElementFactory>,
    create: Arc<dyn CreateSession>,
}

impl AppendTaskDragStart {
    /// Handler placing tasks of one score tier
    #[must_use]
    pub fn new(
        score: SuitabilityScore,
        business_objects: Arc<dyn BusinessObjectFactory>,
        elements: Arc<dyn ElementFactory>,
        create: Arc<dyn CreateSession>,
    ) -> Self {
        Self {
            score,
            business_objects,
            elements,
            create,
        }
    }

    /// Score this handler attaches
    #[inline]
    #[must_use]
    pub fn score(&self) -> SuitabilityScore {
        self.score
    }
}

impl DragAction for AppendTaskDragStart {
    fn drag_start(&self, event: &PointerEvent, element: &Element) -> Result<(), ServiceError> {
        let shape = scored_task_shape(&*self.business_objects, &*self.elements, self.score)?;
        tracing::debug!(score = %self.score, origin = %event.position, "starting create session for scored task");
        self.create.start(event, shape, Some(element))
    }
}

impl fmt::Debug for AppendTaskDragStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppendTaskDragStart")
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

/// Appends a scored task on click
///
/// Without a resolved auto-place capability the handler reuses the
/// drag-start handler of the same tier, so a click still lands the task
/// through an interactive session.
pub struct AppendTaskClick {
    score: SuitabilityScore,
    business_objects: Arc<dyn BusinessObjectFactory>,
    elements: Arc<dyn ElementFactory>,
    auto_place: Option<Arc<dyn AutoPlace>>,
    fallback: Arc<AppendTaskDragStart>,
    delay: DelayPolicy,
}

impl AppendTaskClick {
    /// Handler appending tasks of one score tier
    #[must_use]
    pub fn new(
        score: SuitabilityScore,
        business_objects: Arc<dyn BusinessObjectFactory>,
        elements: Arc<dyn ElementFactory>,
        auto_place: Option<Arc<dyn AutoPlace>>,
        fallback: Arc<AppendTaskDragStart>,
        delay: DelayPolicy,
    ) -> Self {
        Self {
            score,
            business_objects,
            elements,
            auto_place,
            fallback,
            delay,
        }
    }

    /// Score this handler attaches
    #[inline]
    #[must_use]
    pub fn score(&self) -> SuitabilityScore {
        self.score
    }

    /// Whether auto-placement was resolved for this handler
    #[inline]
    #[must_use]
    pub fn auto_places(&self) -> bool {
        self.auto_place.is_some()
    }
}

#[async_trait::async_trait]
impl ClickAction for AppendTaskClick {
    async fn click(&self, event: &PointerEvent, element: &Element) -> Result<(), ServiceError> {
        self.delay.wait().await;

        match &self.auto_place {
            Some(auto_place) => {
                let shape =
                    scored_task_shape(&*self.business_objects, &*self.elements, self.score)?;
                let id = auto_place.append(element, shape)?;
                tracing::debug!(score = %self.score, element = %id, "auto-placed scored task");
                Ok(())
            }
            None => self.fallback.drag_start(event, element),
        }
    }
}

impl fmt::Debug for AppendTaskClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppendTaskClick")
            .field("score", &self.score)
            .field("auto_place", &self.auto_place.is_some())
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpad_test_utils::{
        anchor_element, pointer_event, CountingBusinessObjects, CountingShapes, RecordingAutoPlace,
        RecordingCreateSession,
    };

    fn drag_handler(
        score: SuitabilityScore,
        create: Arc<RecordingCreateSession>,
    ) -> AppendTaskDragStart {
        AppendTaskDragStart::new(
            score,
            Arc::new(CountingBusinessObjects::new()),
            Arc::new(CountingShapes::new()),
            create,
        )
    }

    #[test]
    fn drag_start_creates_one_scored_shape_and_starts_one_session() {
        let create = Arc::new(RecordingCreateSession::new());
        let business_objects = Arc::new(CountingBusinessObjects::new());
        let shapes = Arc::new(CountingShapes::new());
        let handler = AppendTaskDragStart::new(
            SuitabilityScore::Average,
            business_objects.clone(),
            shapes.clone(),
            create.clone(),
        );

        let anchor = anchor_element();
        handler.drag_start(&pointer_event(), &anchor).unwrap();

        assert_eq!(business_objects.created(), 1);
        assert_eq!(shapes.created(), 1);
        let started = create.started();
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].suitable, Some(SuitabilityScore::Average));
        assert_eq!(started[0].anchor, Some(anchor.id()));
        assert_eq!(started[0].origin, pointer_event().position);
    }

    #[tokio::test]
    async fn click_auto_places_when_capability_present() {
        let auto_place = Arc::new(RecordingAutoPlace::new());
        let create = Arc::new(RecordingCreateSession::new());
        let handler = AppendTaskClick::new(
            SuitabilityScore::High,
            Arc::new(CountingBusinessObjects::new()),
            Arc::new(CountingShapes::new()),
            Some(auto_place.clone()),
            Arc::new(drag_handler(SuitabilityScore::High, create.clone())),
            DelayPolicy::none(),
        );

        let anchor = anchor_element();
        handler.click(&pointer_event(), &anchor).await.unwrap();

        let appended = auto_place.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].anchor, anchor.id());
        assert_eq!(appended[0].suitable, Some(SuitabilityScore::High));
        assert_eq!(create.count(), 0);
    }

    #[tokio::test]
    async fn click_degrades_to_a_session_without_the_capability() {
        let create = Arc::new(RecordingCreateSession::new());
        let handler = AppendTaskClick::new(
            SuitabilityScore::Low,
            Arc::new(CountingBusinessObjects::new()),
            Arc::new(CountingShapes::new()),
            None,
            Arc::new(drag_handler(SuitabilityScore::Low, create.clone())),
            DelayPolicy::none(),
        );

        handler
            .click(&pointer_event(), &anchor_element())
            .await
            .unwrap();

        let started = create.started();
        assert_eq!(started.len(), 1);
        assert_eq!(started[0].suitable, Some(SuitabilityScore::Low));
    }

    #[tokio::test]
    async fn factory_failure_propagates_unmodified() {
        let create = Arc::new(RecordingCreateSession::new());
        let handler = AppendTaskClick::new(
            SuitabilityScore::High,
            Arc::new(CountingBusinessObjects::failing()),
            Arc::new(CountingShapes::new()),
            Some(Arc::new(RecordingAutoPlace::new())),
            Arc::new(drag_handler(SuitabilityScore::High, create)),
            DelayPolicy::none(),
        );

        let err = handler
            .click(&pointer_event(), &anchor_element())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Failed(_)));
    }
}
