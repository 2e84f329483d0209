//! Error types for the editor runtime
//!
//! Layered by subsystem:
//! - [`ServiceError`] for collaborator failures (factories, placement,
//!   create sessions)
//! - [`PadError`] for context-pad dispatch
//! - [`ImportError`] for the document import path
//!
//! Pad extensions define no error kinds of their own; everything an entry
//! action can fail with originates here and propagates unmodified.

use flowpad_model::{ElementId, TypeNameError};

/// Collaborator service failures
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Factory does not know the requested element type
    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    /// Type tag failed to parse
    #[error("malformed element type: {0}")]
    MalformedType(#[from] TypeNameError),

    /// Placement probing found no free slot near the anchor
    #[error("no free slot near anchor {anchor}")]
    NoFreeSlot {
        /// Anchor the placement was attempted against
        anchor: ElementId,
    },

    /// Canvas has been destroyed; commits are refused
    #[error("canvas detached")]
    CanvasDetached,

    /// A create session is already pending
    #[error("create session already pending")]
    SessionPending,

    /// No create session to complete or cancel
    #[error("no create session pending")]
    NoSession,

    /// Backend-specific failure
    #[error("service failed: {0}")]
    Failed(String),
}

/// Context-pad dispatch failures
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    /// No provider produced the requested entry
    #[error("unknown pad entry: {0}")]
    UnknownEntry(String),

    /// Anchor element is not on the canvas
    #[error("unknown anchor element: {0}")]
    UnknownElement(ElementId),

    /// Entry action failed in a collaborator
    #[error("entry action failed: {0}")]
    Action(#[from] ServiceError),
}

/// Document import failures
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Fetching the document over HTTP failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Payload is not a valid document
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Document contains no importable elements
    #[error("document has no importable elements")]
    Empty,

    /// Canvas rejected an element mid-import
    #[error("import commit failed: {0}")]
    Commit(#[from] ServiceError),
}
