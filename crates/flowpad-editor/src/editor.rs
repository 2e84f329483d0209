//! Editor facade
//!
//! [`Editor`] wires the canvas, the standard services, the event hub, and
//! the context pad into one handle. Pad providers are constructed against
//! the handle's service accessors; drivers (CLI, tests) use the dispatch
//! and import methods.

use crate::auto_place::GridAutoPlace;
use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::create::InteractiveCreate;
use crate::error::{ImportError, PadError};
use crate::events::{EditorEvents, ImportDoneEvent, ShapeAddedEvent};
use crate::factories::{StandardBusinessObjectFactory, StandardElementFactory};
use crate::pad::ContextPad;
use crate::services::{AutoPlace, BusinessObjectFactory, ElementFactory, Translate};
use crate::translate::IdentityTranslate;
use flowpad_model::{Document, ElementId, Point, PointerEvent, ShapeSpec, SuitabilityScore};
use std::collections::HashSet;
use std::sync::Arc;

/// Outcome of a successful import
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Elements committed to the canvas, in document order
    pub imported: Vec<ElementId>,
    /// Records that were skipped or partially applied
    pub warnings: Vec<String>,
}

/// Host editor handle
pub struct Editor {
    config: EditorConfig,
    canvas: Arc<Canvas>,
    events: Arc<EditorEvents>,
    pad: Arc<ContextPad>,
    business_objects: Arc<dyn BusinessObjectFactory>,
    elements: Arc<dyn ElementFactory>,
    create: Arc<InteractiveCreate>,
    translate: Arc<dyn Translate>,
    auto_place: Option<Arc<GridAutoPlace>>,
}

impl Editor {
    /// Create an editor with the standard services
    ///
    /// The auto-place capability is constructed only when the config
    /// enables it; [`Editor::auto_place`] resolves to `None` otherwise.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let canvas = Arc::new(Canvas::new(config.view_size));
        let events = Arc::new(EditorEvents::new());
        let auto_place = config
            .auto_place
            .then(|| Arc::new(GridAutoPlace::new(canvas.clone(), events.clone(), &config)));
        let create = Arc::new(InteractiveCreate::new(canvas.clone(), events.clone()));
        tracing::info!(auto_place = config.auto_place, "editor ready");
        Self {
            config,
            canvas,
            events,
            pad: Arc::new(ContextPad::new()),
            business_objects: Arc::new(StandardBusinessObjectFactory::new()),
            elements: Arc::new(StandardElementFactory::new()),
            create,
            translate: Arc::new(IdentityTranslate),
            auto_place,
        }
    }

    /// With a custom translation service
    #[must_use]
    pub fn with_translate(mut self, translate: Arc<dyn Translate>) -> Self {
        self.translate = translate;
        self
    }

    /// Editor configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The canvas
    #[inline]
    #[must_use]
    pub fn canvas(&self) -> Arc<Canvas> {
        self.canvas.clone()
    }

    /// The event hub
    #[inline]
    #[must_use]
    pub fn events(&self) -> Arc<EditorEvents> {
        self.events.clone()
    }

    /// The context pad registry
    #[inline]
    #[must_use]
    pub fn pad(&self) -> Arc<ContextPad> {
        self.pad.clone()
    }

    /// Business-object factory service
    #[inline]
    #[must_use]
    pub fn business_objects(&self) -> Arc<dyn BusinessObjectFactory> {
        self.business_objects.clone()
    }

    /// Element factory service
    #[inline]
    #[must_use]
    pub fn element_factory(&self) -> Arc<dyn ElementFactory> {
        self.elements.clone()
    }

    /// Create-session service
    #[inline]
    #[must_use]
    pub fn create_session(&self) -> Arc<InteractiveCreate> {
        self.create.clone()
    }

    /// Translation service
    #[inline]
    #[must_use]
    pub fn translate(&self) -> Arc<dyn Translate> {
        self.translate.clone()
    }

    /// Auto-place capability, when the config enabled it
    ///
    /// Resolved once by callers; absence is not an error.
    #[inline]
    #[must_use]
    pub fn auto_place(&self) -> Option<Arc<dyn AutoPlace>> {
        self.auto_place
            .clone()
            .map(|service| service as Arc<dyn AutoPlace>)
    }

    /// Dispatch a pad click against a committed element
    ///
    /// # Errors
    /// Fails when the element is not on the canvas, the entry id is
    /// unknown, or the entry's collaborators fail.
    pub async fn click_entry(
        &self,
        entry_id: &str,
        event: &PointerEvent,
        element_id: ElementId,
    ) -> Result<(), PadError> {
        let element = self
            .canvas
            .element(element_id)
            .ok_or(PadError::UnknownElement(element_id))?;
        self.pad.trigger_click(entry_id, event, &element).await
    }

    /// Dispatch a pad drag-start against a committed element
    ///
    /// # Errors
    /// Same failure modes as [`Editor::click_entry`].
    pub fn drag_entry(
        &self,
        entry_id: &str,
        event: &PointerEvent,
        element_id: ElementId,
    ) -> Result<(), PadError> {
        let element = self
            .canvas
            .element(element_id)
            .ok_or(PadError::UnknownElement(element_id))?;
        self.pad.trigger_drag_start(entry_id, event, &element)
    }

    /// Import a parsed document onto the canvas
    ///
    /// Lenient per record: unknown element types, invalid suitability
    /// values, and duplicate record ids become warnings and the record is
    /// skipped or partially applied. The whole import fails when nothing
    /// was importable or the canvas rejects a commit. `import.done` is
    /// emitted on every outcome; the viewport is fitted on success.
    ///
    /// # Errors
    /// [`ImportError::Empty`] when no record made it onto the canvas,
    /// [`ImportError::Commit`] when the canvas refused one.
    pub fn import_document(&self, doc: &Document) -> Result<ImportReport, ImportError> {
        if doc.elements.is_empty() {
            return Err(self.fail_import(ImportError::Empty));
        }

        let mut warnings = Vec::new();
        let mut imported = Vec::new();
        let mut seen_ids = HashSet::new();

        for (index, record) in doc.elements.iter().enumerate() {
            if let Some(id) = &record.id {
                if !seen_ids.insert(id.clone()) {
                    warnings.push(format!("record {index}: duplicate element id `{id}`"));
                    continue;
                }
            }

            let mut business_object = match self.business_objects.create(&record.type_name) {
                Ok(bo) => bo,
                Err(err) => {
                    warnings.push(format!("record {index}: {err}"));
                    continue;
                }
            };
            if let Some(name) = &record.name {
                business_object = business_object.with_name(name.clone());
            }
            if let Some(raw) = record.suitable {
                match SuitabilityScore::from_value(raw) {
                    Ok(score) => business_object = business_object.with_suitability(score),
                    Err(err) => warnings.push(format!("record {index}: {err}")),
                }
            }
            for (key, value) in &record.attributes {
                business_object = business_object.with_attribute(key.clone(), value.clone());
            }

            let type_name = business_object.type_name().clone();
            let spec = ShapeSpec::new(type_name.clone(), business_object);
            let shape = match self.elements.create_shape(spec) {
                Ok(shape) => shape,
                Err(err) => {
                    warnings.push(format!("record {index}: {err}"));
                    continue;
                }
            };

            let mut bounds = shape.bounds().at(Point::new(record.x, record.y));
            if let Some(width) = record.width {
                bounds.size.width = width;
            }
            if let Some(height) = record.height {
                bounds.size.height = height;
            }

            match self.canvas.commit(shape.with_bounds(bounds)) {
                Ok(id) => {
                    imported.push(id);
                    self.events.emit_shape_added(ShapeAddedEvent { id, type_name });
                }
                Err(err) => return Err(self.fail_import(ImportError::Commit(err))),
            }
        }

        if imported.is_empty() {
            return Err(self.fail_import(ImportError::Empty));
        }

        for warning in &warnings {
            tracing::warn!(detail = %warning, "import warning");
        }
        self.canvas.zoom_fit();
        self.events.emit_import_done(ImportDoneEvent {
            warnings: warnings.clone(),
            error: None,
        });
        tracing::info!(
            elements = imported.len(),
            warnings = warnings.len(),
            "diagram imported"
        );
        Ok(ImportReport { imported, warnings })
    }

    /// Parse and import a JSON document
    ///
    /// # Errors
    /// [`ImportError::Malformed`] on bad JSON, plus the
    /// [`Editor::import_document`] failure modes.
    pub fn import_str(&self, payload: &str) -> Result<ImportReport, ImportError> {
        match serde_json::from_str::<Document>(payload) {
            Ok(doc) => self.import_document(&doc),
            Err(err) => Err(self.fail_import(ImportError::Malformed(err))),
        }
    }

    /// Tear down the editor
    ///
    /// Cancels any pending create session and destroys the canvas.
    /// In-flight async actions resolve against the detached canvas and
    /// surface collaborator errors instead of panicking.
    pub fn destroy(&self) {
        self.create.cancel();
        self.canvas.destroy();
        tracing::info!("editor destroyed");
    }

    fn fail_import(&self, error: ImportError) -> ImportError {
        self.events.emit_import_done(ImportDoneEvent {
            warnings: Vec::new(),
            error: Some(error.to_string()),
        });
        error
    }
}
