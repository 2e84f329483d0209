//! Context pad registry and entry descriptors
//!
//! Providers contribute named entries for a selected element; the
//! registry merges them into one ordered table and dispatches click and
//! drag-start actions. Click actions are async (they may suspend on
//! timers or placement work); drag-start actions must return before the
//! drag machinery takes over, so they are synchronous.

use crate::error::{PadError, ServiceError};
use flowpad_model::{Element, PointerEvent};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered entry table keyed by entry id
pub type PadEntries = IndexMap<String, PadEntry>;

/// Async click action behind a pad entry
#[async_trait::async_trait]
pub trait ClickAction: Send + Sync {
    /// Run the entry's click behavior against the anchor element
    ///
    /// # Errors
    /// Collaborator failures propagate unmodified.
    async fn click(&self, event: &PointerEvent, element: &Element) -> Result<(), ServiceError>;
}

/// Synchronous drag-start action behind a pad entry
pub trait DragAction: Send + Sync {
    /// Begin the entry's drag behavior; must not suspend
    ///
    /// # Errors
    /// Collaborator failures propagate unmodified.
    fn drag_start(&self, event: &PointerEvent, element: &Element) -> Result<(), ServiceError>;
}

/// Actions bundled on one entry
#[derive(Clone)]
pub struct EntryAction {
    /// Invoked on click or tap
    pub click: Arc<dyn ClickAction>,
    /// Invoked when a drag leaves the pad control
    pub dragstart: Arc<dyn DragAction>,
}

/// One context-pad entry descriptor
#[derive(Clone)]
pub struct PadEntry {
    /// Display group the entry is rendered under
    pub group: String,
    /// Style hook for the rendered control
    pub class_name: String,
    /// Translated tooltip title
    pub title: String,
    /// Click and drag actions
    pub action: EntryAction,
}

impl std::fmt::Debug for PadEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PadEntry")
            .field("group", &self.group)
            .field("class_name", &self.class_name)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Contributes entries to the context pad
pub trait ContextPadProvider: Send + Sync {
    /// Entries this provider offers for `element`
    ///
    /// Must be a pure function of the provider's captured collaborators;
    /// the element is context and implementations may ignore it.
    fn entries(&self, element: &Element) -> PadEntries;
}

/// The context pad registry
///
/// Holds registered providers in registration order. Later registrations
/// win when two providers use the same entry id.
#[derive(Default)]
pub struct ContextPad {
    providers: RwLock<Vec<Arc<dyn ContextPadProvider>>>,
}

impl ContextPad {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider
    pub fn register_provider(&self, provider: Arc<dyn ContextPadProvider>) {
        let mut providers = self.providers.write();
        providers.push(provider);
        tracing::debug!(providers = providers.len(), "context pad provider registered");
    }

    /// Number of registered providers
    #[inline]
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.read().len()
    }

    /// Merged entry table for an element
    #[must_use]
    pub fn entries_for(&self, element: &Element) -> PadEntries {
        let mut merged = PadEntries::new();
        for provider in self.providers.read().iter() {
            for (id, entry) in provider.entries(element) {
                if merged.insert(id.clone(), entry).is_some() {
                    tracing::warn!(entry = %id, "pad entry overridden by later provider");
                }
            }
        }
        merged
    }

    /// Dispatch a click action
    ///
    /// # Errors
    /// [`PadError::UnknownEntry`] when no provider offers `entry_id`;
    /// collaborator failures pass through otherwise.
    pub async fn trigger_click(
        &self,
        entry_id: &str,
        event: &PointerEvent,
        element: &Element,
    ) -> Result<(), PadError> {
        let entry = self
            .entries_for(element)
            .shift_remove(entry_id)
            .ok_or_else(|| PadError::UnknownEntry(entry_id.to_string()))?;
        tracing::debug!(entry = entry_id, "dispatching pad click");
        entry.action.click.click(event, element).await?;
        Ok(())
    }

    /// Dispatch a drag-start action
    ///
    /// # Errors
    /// [`PadError::UnknownEntry`] when no provider offers `entry_id`;
    /// collaborator failures pass through otherwise.
    pub fn trigger_drag_start(
        &self,
        entry_id: &str,
        event: &PointerEvent,
        element: &Element,
    ) -> Result<(), PadError> {
        let entry = self
            .entries_for(element)
            .shift_remove(entry_id)
            .ok_or_else(|| PadError::UnknownEntry(entry_id.to_string()))?;
        tracing::debug!(entry = entry_id, "dispatching pad drag start");
        entry.action.dragstart.drag_start(event, element)?;
        Ok(())
    }
}
