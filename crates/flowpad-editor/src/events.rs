//! Typed editor events
//!
//! One broadcast channel per event kind, with independent subscribers.
//! Emission never blocks and tolerates having no receivers; slow
//! receivers lag instead of stalling the editor.

use flowpad_model::{ElementId, TypeName};
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// Import finished, successfully or not
#[derive(Debug, Clone)]
pub struct ImportDoneEvent {
    /// Importer warnings, empty on a clean import
    pub warnings: Vec<String>,
    /// Error rendering when the import failed
    pub error: Option<String>,
}

impl ImportDoneEvent {
    /// Whether the import succeeded
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// A shape was committed to the canvas
#[derive(Debug, Clone)]
pub struct ShapeAddedEvent {
    /// Committed element id
    pub id: ElementId,
    /// Element type tag
    pub type_name: TypeName,
}

/// Editor event hub
#[derive(Debug)]
pub struct EditorEvents {
    import_done: broadcast::Sender<ImportDoneEvent>,
    shape_added: broadcast::Sender<ShapeAddedEvent>,
}

impl EditorEvents {
    /// Create the hub with its channels
    #[must_use]
    pub fn new() -> Self {
        let (import_done, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (shape_added, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            import_done,
            shape_added,
        }
    }

    /// Subscribe to import completion
    #[must_use]
    pub fn subscribe_import_done(&self) -> broadcast::Receiver<ImportDoneEvent> {
        self.import_done.subscribe()
    }

    /// Subscribe to shape commits
    #[must_use]
    pub fn subscribe_shape_added(&self) -> broadcast::Receiver<ShapeAddedEvent> {
        self.shape_added.subscribe()
    }

    /// Announce import completion
    pub fn emit_import_done(&self, event: ImportDoneEvent) {
        let _ = self.import_done.send(event);
    }

    /// Announce a shape commit
    pub fn emit_shape_added(&self, event: ShapeAddedEvent) {
        let _ = self.shape_added.send(event);
    }
}

impl Default for EditorEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_without_receivers_is_fine() {
        let events = EditorEvents::new();
        events.emit_import_done(ImportDoneEvent {
            warnings: Vec::new(),
            error: None,
        });
    }

    #[test]
    fn subscribers_see_events() {
        let events = EditorEvents::new();
        let mut rx = events.subscribe_shape_added();

        events.emit_shape_added(ShapeAddedEvent {
            id: ElementId::new(),
            type_name: TypeName::task(),
        });

        let event = rx.try_recv().unwrap();
        assert_eq!(event.type_name, TypeName::task());
    }
}
