//! Testing utilities for the flowpad workspace
//!
//! Recording service fakes and shared fixtures.

#![allow(missing_docs)]

use flowpad_editor::{
    AutoPlace, BusinessObjectFactory, CreateSession, Editor, EditorConfig, ElementFactory,
    ServiceError, StandardBusinessObjectFactory, StandardElementFactory,
};
use flowpad_model::{
    Bounds, BusinessObject, Document, Element, ElementId, ElementRecord, Point, PointerEvent,
    Shape, ShapeSpec, SuitabilityScore, TypeName,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Business-object factory that counts successful creations.
#[derive(Debug, Default)]
pub struct CountingBusinessObjects {
    inner: StandardBusinessObjectFactory,
    created: AtomicUsize,
    fail: bool,
}

impl CountingBusinessObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory that refuses every request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl BusinessObjectFactory for CountingBusinessObjects {
    fn create(&self, type_name: &str) -> Result<BusinessObject, ServiceError> {
        if self.fail {
            return Err(ServiceError::Failed(
                "business object factory offline".to_string(),
            ));
        }
        let object = self.inner.create(type_name)?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(object)
    }
}

/// Element factory that counts the shapes it hands out.
#[derive(Debug, Default)]
pub struct CountingShapes {
    inner: StandardElementFactory,
    created: AtomicUsize,
    fail: bool,
}

impl CountingShapes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ElementFactory for CountingShapes {
    fn create_shape(&self, spec: ShapeSpec) -> Result<Shape, ServiceError> {
        if self.fail {
            return Err(ServiceError::Failed(
                "element factory offline".to_string(),
            ));
        }
        let shape = self.inner.create_shape(spec)?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(shape)
    }
}

/// What a recording auto-place saw for one append.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendRecord {
    pub anchor: ElementId,
    pub element: ElementId,
    pub element_type: TypeName,
    pub suitable: Option<SuitabilityScore>,
}

/// Auto-place fake that records appends instead of probing a canvas.
#[derive(Debug, Default)]
pub struct RecordingAutoPlace {
    appended: Mutex<Vec<AppendRecord>>,
    fail: bool,
}

impl RecordingAutoPlace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-place that reports every column as full.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn appended(&self) -> Vec<AppendRecord> {
        self.appended.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.appended.lock().len()
    }
}

impl AutoPlace for RecordingAutoPlace {
    fn append(&self, anchor: &Element, shape: Shape) -> Result<ElementId, ServiceError> {
        if self.fail {
            return Err(ServiceError::NoFreeSlot {
                anchor: anchor.id(),
            });
        }
        let element = shape.into_element();
        let record = AppendRecord {
            anchor: anchor.id(),
            element: element.id(),
            element_type: element.type_name().clone(),
            suitable: element.business_object().suitable(),
        };
        let id = record.element;
        self.appended.lock().push(record);
        Ok(id)
    }
}

/// What a recording create session saw for one start.
#[derive(Debug, Clone, PartialEq)]
pub struct StartRecord {
    pub origin: Point,
    pub anchor: Option<ElementId>,
    pub element_type: TypeName,
    pub suitable: Option<SuitabilityScore>,
}

/// Create-session fake that records starts instead of driving a drag.
#[derive(Debug, Default)]
pub struct RecordingCreateSession {
    started: Mutex<Vec<StartRecord>>,
    fail: bool,
}

impl RecordingCreateSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session host that always reports a pending session.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn started(&self) -> Vec<StartRecord> {
        self.started.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.started.lock().len()
    }
}

impl CreateSession for RecordingCreateSession {
    fn start(
        &self,
        event: &PointerEvent,
        shape: Shape,
        anchor: Option<&Element>,
    ) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::SessionPending);
        }
        self.started.lock().push(StartRecord {
            origin: event.position,
            anchor: anchor.map(Element::id),
            element_type: shape.type_name().clone(),
            suitable: shape.business_object().suitable(),
        });
        Ok(())
    }
}

/// Committed task element sitting at a fixed spot, for use as an anchor.
pub fn anchor_element() -> Element {
    Shape::new(
        TypeName::task(),
        Bounds::from_parts(100.0, 100.0, 100.0, 80.0),
        BusinessObject::new(TypeName::task()).with_name("anchor"),
    )
    .into_element()
}

/// Pointer event somewhere on the canvas.
pub fn pointer_event() -> PointerEvent {
    PointerEvent::at(320.0, 240.0)
}

/// Small document with one record per built-in element type.
pub fn sample_document() -> Document {
    let mut task = ElementRecord::new("flow:Task", 40.0, 40.0);
    task.id = Some("t1".to_string());
    task.name = Some("check stock".to_string());
    task.suitable = Some(100);

    let mut event = ElementRecord::new("flow:Event", 300.0, 60.0);
    event.id = Some("e1".to_string());

    let mut gateway = ElementRecord::new("flow:Gateway", 450.0, 55.0);
    gateway.id = Some("g1".to_string());

    let mut doc = Document::named("sample flow");
    doc.elements.push(task);
    doc.elements.push(event);
    doc.elements.push(gateway);
    doc
}

/// Editor with default configuration.
pub fn setup_editor() -> Editor {
    Editor::new(EditorConfig::new())
}
