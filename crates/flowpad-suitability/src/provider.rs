//! The suitability context-pad provider
//!
//! Contributes exactly three append entries, one per score tier, to the
//! host context pad. Collaborators are captured once at registration and
//! the auto-place capability is resolved once: when the host configuration
//! disables auto-placement the capability is discarded even if supplied.

use crate::actions::{AppendTaskClick, AppendTaskDragStart};
use crate::delay::DelayPolicy;
use flowpad_editor::{
    AutoPlace, BusinessObjectFactory, ContextPad, ContextPadProvider, CreateSession, Editor,
    EditorConfig, ElementFactory, EntryAction, PadEntries, PadEntry, Translate,
};
use flowpad_model::{Element, SuitabilityScore};
use std::fmt;
use std::sync::Arc;

/// Menu group shared by all three entries
pub const ENTRY_GROUP: &str = "model";

/// Entry key for a score tier
#[must_use]
pub const fn entry_id(score: SuitabilityScore) -> &'static str {
    match score {
        SuitabilityScore::Low => "append.low-task",
        SuitabilityScore::Average => "append.average-task",
        SuitabilityScore::High => "append.high-task",
    }
}

/// Icon class for a score tier
#[must_use]
pub const fn entry_class(score: SuitabilityScore) -> &'static str {
    match score {
        SuitabilityScore::Low => "flow-icon-task red",
        SuitabilityScore::Average => "flow-icon-task yellow",
        SuitabilityScore::High => "flow-icon-task green",
    }
}

/// Collaborators the provider captures at registration
#[derive(Clone)]
pub struct PadCollaborators {
    /// Constructs typed business objects
    pub business_objects: Arc<dyn BusinessObjectFactory>,
    /// Wraps business objects into shapes
    pub elements: Arc<dyn ElementFactory>,
    /// Starts interactive create sessions
    pub create: Arc<dyn CreateSession>,
    /// Localizes entry titles
    pub translate: Arc<dyn Translate>,
    /// Optional auto-placement capability
    pub auto_place: Option<Arc<dyn AutoPlace>>,
}

impl PadCollaborators {
    /// Capture the standard services of a live editor
    #[must_use]
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            business_objects: editor.business_objects(),
            elements: editor.element_factory(),
            create: editor.create_session(),
            translate: editor.translate(),
            auto_place: editor.auto_place(),
        }
    }
}

impl fmt::Debug for PadCollaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PadCollaborators")
            .field("auto_place", &self.auto_place.is_some())
            .finish_non_exhaustive()
    }
}

/// Context-pad provider for suitability-scored task creation
pub struct SuitabilityPadProvider {
    translate: Arc<dyn Translate>,
    low: EntryAction,
    average: EntryAction,
    high: EntryAction,
}

impl SuitabilityPadProvider {
    /// Build the provider and register it with the pad
    ///
    /// Handlers are constructed here, once, and shared across every
    /// `entries` call. Each tier's click handler reuses that tier's
    /// drag-start handler as its no-auto-place fallback.
    pub fn register(
        pad: &ContextPad,
        collaborators: PadCollaborators,
        config: &EditorConfig,
        delay: DelayPolicy,
    ) -> Arc<Self> {
        let PadCollaborators {
            business_objects,
            elements,
            create,
            translate,
            auto_place,
        } = collaborators;
        let auto_place = if config.auto_place { auto_place } else { None };
        let resolved = auto_place.is_some();

        let action = |score: SuitabilityScore| -> EntryAction {
            let dragstart = Arc::new(AppendTaskDragStart::new(
                score,
                business_objects.clone(),
                elements.clone(),
                create.clone(),
            ));
            let click = Arc::new(AppendTaskClick::new(
                score,
                business_objects.clone(),
                elements.clone(),
                auto_place.clone(),
                dragstart.clone(),
                delay,
            ));
            EntryAction { click, dragstart }
        };

        let provider = Arc::new(Self {
            translate,
            low: action(SuitabilityScore::Low),
            average: action(SuitabilityScore::Average),
            high: action(SuitabilityScore::High),
        });
        pad.register_provider(provider.clone());
        tracing::info!(
            auto_place = resolved,
            delay = ?delay.delay(),
            "suitability pad entries registered"
        );
        provider
    }

    /// Register against a live editor with its standard services
    pub fn install(editor: &Editor, delay: DelayPolicy) -> Arc<Self> {
        let pad = editor.pad();
        Self::register(
            &pad,
            PadCollaborators::from_editor(editor),
            editor.config(),
            delay,
        )
    }

    fn entry(&self, score: SuitabilityScore, action: EntryAction) -> PadEntry {
        PadEntry {
            group: ENTRY_GROUP.to_string(),
            class_name: entry_class(score).to_string(),
            title: self
                .translate
                .translate(&format!("Append Task with {score} suitability score")),
            action,
        }
    }
}

impl ContextPadProvider for SuitabilityPadProvider {
    fn entries(&self, _element: &Element) -> PadEntries {
        let mut entries = PadEntries::new();
        for (score, action) in [
            (SuitabilityScore::Low, &self.low),
            (SuitabilityScore::Average, &self.average),
            (SuitabilityScore::High, &self.high),
        ] {
            entries.insert(
                entry_id(score).to_string(),
                self.entry(score, action.clone()),
            );
        }
        entries
    }
}

impl fmt::Debug for SuitabilityPadProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuitabilityPadProvider")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpad_editor::IdentityTranslate;
    use flowpad_test_utils::{
        anchor_element, CountingBusinessObjects, CountingShapes, RecordingAutoPlace,
        RecordingCreateSession,
    };

    fn collaborators(auto_place: Option<Arc<dyn AutoPlace>>) -> PadCollaborators {
        PadCollaborators {
            business_objects: Arc::new(CountingBusinessObjects::new()),
            elements: Arc::new(CountingShapes::new()),
            create: Arc::new(RecordingCreateSession::new()),
            translate: Arc::new(IdentityTranslate),
            auto_place,
        }
    }

    #[test]
    fn registers_itself_with_the_pad() {
        let pad = ContextPad::new();
        SuitabilityPadProvider::register(
            &pad,
            collaborators(None),
            &EditorConfig::new(),
            DelayPolicy::none(),
        );
        assert_eq!(pad.provider_count(), 1);
    }

    #[test]
    fn entry_table_has_the_three_tiers_in_order() {
        let pad = ContextPad::new();
        let provider = SuitabilityPadProvider::register(
            &pad,
            collaborators(None),
            &EditorConfig::new(),
            DelayPolicy::none(),
        );

        let entries = provider.entries(&anchor_element());
        let ids: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(
            ids,
            vec!["append.low-task", "append.average-task", "append.high-task"]
        );

        let low = &entries["append.low-task"];
        assert_eq!(low.group, "model");
        assert_eq!(low.class_name, "flow-icon-task red");
        assert_eq!(low.title, "Append Task with low suitability score");
        assert_eq!(
            entries["append.average-task"].class_name,
            "flow-icon-task yellow"
        );
        assert_eq!(
            entries["append.high-task"].title,
            "Append Task with high suitability score"
        );
    }

    #[test]
    fn entries_are_idempotent() {
        let pad = ContextPad::new();
        let provider = SuitabilityPadProvider::register(
            &pad,
            collaborators(Some(Arc::new(RecordingAutoPlace::new()))),
            &EditorConfig::new(),
            DelayPolicy::none(),
        );

        let anchor = anchor_element();
        let first = provider.entries(&anchor);
        let second = provider.entries(&anchor);

        assert_eq!(first.len(), second.len());
        for (id, entry) in &first {
            let other = &second[id];
            assert_eq!(entry.group, other.group);
            assert_eq!(entry.class_name, other.class_name);
            assert_eq!(entry.title, other.title);
        }
    }

    #[tokio::test]
    async fn disabled_config_discards_the_capability() {
        let auto_place = Arc::new(RecordingAutoPlace::new());
        let create = Arc::new(RecordingCreateSession::new());
        let mut collaborators = collaborators(Some(auto_place.clone()));
        collaborators.create = create.clone();

        let pad = ContextPad::new();
        SuitabilityPadProvider::register(
            &pad,
            collaborators,
            &EditorConfig::new().with_auto_place(false),
            DelayPolicy::none(),
        );

        let anchor = anchor_element();
        pad.trigger_click(
            "append.high-task",
            &flowpad_test_utils::pointer_event(),
            &anchor,
        )
        .await
        .unwrap();

        assert_eq!(auto_place.count(), 0);
        assert_eq!(create.count(), 1);
    }
}
