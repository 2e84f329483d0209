//! Headless canvas: the committed element graph and viewport
//!
//! Elements enter the canvas exclusively through [`Canvas::commit`],
//! which takes ownership of a transient shape. Commits may race; they are
//! applied in arrival order with no de-duplication beyond the id, which
//! is freshly generated per shape.

use crate::error::ServiceError;
use dashmap::DashMap;
use flowpad_model::{Bounds, Element, ElementId, Point, Shape, Size};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Zoom limits for viewport fitting
const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 8.0;
/// Padding around the content when fitting the viewport
const FIT_PADDING: f32 = 20.0;

/// Current viewport transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scale factor
    pub zoom: f32,
    /// Diagram coordinates shown at the viewport center
    pub center: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center: Point::default(),
        }
    }
}

/// Committed element graph plus viewport state
#[derive(Debug)]
pub struct Canvas {
    elements: DashMap<ElementId, Element>,
    viewport: RwLock<Viewport>,
    view_size: Size,
    detached: AtomicBool,
}

impl Canvas {
    /// Create an empty canvas fitted to a viewport extent
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            elements: DashMap::new(),
            viewport: RwLock::new(Viewport::default()),
            view_size,
            detached: AtomicBool::new(false),
        }
    }

    /// Commit a shape, transferring ownership to the canvas
    ///
    /// # Errors
    /// Returns [`ServiceError::CanvasDetached`] after [`Canvas::destroy`];
    /// late continuations of async actions land here instead of panicking.
    pub fn commit(&self, shape: Shape) -> Result<ElementId, ServiceError> {
        if self.detached.load(Ordering::Acquire) {
            return Err(ServiceError::CanvasDetached);
        }
        let element = shape.into_element();
        let id = element.id();
        tracing::debug!(element = %id, element_type = %element.type_name(), "element committed");
        self.elements.insert(id, element);
        Ok(id)
    }

    /// Look up a committed element
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.get(&id).map(|entry| entry.clone())
    }

    /// Snapshot of all committed elements, sorted by id
    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        let mut all: Vec<Element> = self
            .elements
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(Element::id);
        all
    }

    /// Number of committed elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the canvas holds no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether any committed element's interior overlaps `bounds`
    #[must_use]
    pub fn is_occupied(&self, bounds: &Bounds) -> bool {
        self.elements
            .iter()
            .any(|entry| entry.bounds().intersects(bounds))
    }

    /// Current viewport
    #[inline]
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport.read()
    }

    /// Fit the viewport to the committed content
    ///
    /// No-op on an empty canvas. Zoom is clamped to 0.1..8.0.
    pub fn zoom_fit(&self) {
        let mut content: Option<Bounds> = None;
        for entry in self.elements.iter() {
            let bounds = entry.bounds();
            content = Some(match content {
                Some(acc) => acc.union(&bounds),
                None => bounds,
            });
        }
        let Some(content) = content else { return };

        let width = content.size.width + 2.0 * FIT_PADDING;
        let height = content.size.height + 2.0 * FIT_PADDING;
        let zoom = (self.view_size.width / width)
            .min(self.view_size.height / height)
            .clamp(MIN_ZOOM, MAX_ZOOM);

        let fitted = Viewport {
            zoom,
            center: content.center(),
        };
        *self.viewport.write() = fitted;
        tracing::debug!(zoom = fitted.zoom, "viewport fitted to content");
    }

    /// Detach the canvas; held elements are dropped and further commits
    /// fail with [`ServiceError::CanvasDetached`]
    pub fn destroy(&self) {
        self.detached.store(true, Ordering::Release);
        self.elements.clear();
        tracing::info!("canvas destroyed");
    }

    /// Whether [`Canvas::destroy`] has run
    #[inline]
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }
}
