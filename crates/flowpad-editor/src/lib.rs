//! Flowpad editor runtime
//!
//! Headless host for process diagrams:
//! - Collaborator service contracts that pad extensions program against
//! - The context pad registry with merged entry tables and dispatch
//! - A canvas of committed elements with viewport fitting
//! - Standard factories, auto-placement, and interactive create sessions
//! - Typed editor events and the document import path
//!
//! Rendering and real pointer capture are out of scope; the runtime backs
//! extension development and headless drivers.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowpad_editor::{Editor, EditorConfig};
//!
//! let editor = Editor::new(EditorConfig::new());
//! let report = editor.import_str(payload)?;
//! println!("imported {} elements", report.imported.len());
//! ```

#![warn(unreachable_pub)]

// Subsystems
pub mod canvas;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod loader;
pub mod pad;
pub mod services;

// Standard service implementations
pub mod auto_place;
pub mod create;
pub mod factories;
pub mod translate;

// Re-exports for convenience
pub use auto_place::GridAutoPlace;
pub use canvas::{Canvas, Viewport};
pub use config::EditorConfig;
pub use create::{InteractiveCreate, PendingCreate};
pub use editor::{Editor, ImportReport};
pub use error::{ImportError, PadError, ServiceError};
pub use events::{EditorEvents, ImportDoneEvent, ShapeAddedEvent};
pub use factories::{StandardBusinessObjectFactory, StandardElementFactory};
pub use loader::DiagramLoader;
pub use pad::{
    ClickAction, ContextPad, ContextPadProvider, DragAction, EntryAction, PadEntries, PadEntry,
};
pub use services::{AutoPlace, BusinessObjectFactory, CreateSession, ElementFactory, Translate};
pub use translate::{IdentityTranslate, TableTranslate};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the editor runtime
    pub use crate::{
        AutoPlace, BusinessObjectFactory, ContextPad, ContextPadProvider, CreateSession,
        DiagramLoader, Editor, EditorConfig, ElementFactory, PadEntries, PadEntry, ServiceError,
        Translate,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
