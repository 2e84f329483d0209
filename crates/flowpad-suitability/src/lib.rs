//! Flowpad suitability extension
//!
//! Extends the flowpad context pad with three append entries that create
//! task elements carrying a suitability score.
//!
//! # Core Concepts
//!
//! - [`SuitabilityPadProvider`]: registers the three scored append entries
//! - [`AppendTaskClick`]: async click handler, waits then places
//! - [`AppendTaskDragStart`]: sync drag handler starting a create session
//! - [`DelayPolicy`]: injectable wait before the click-path placement
//! - [`PadCollaborators`]: the host services the provider captures
//!
//! # Example
//!
//! ```rust,ignore
//! use flowpad_editor::{Editor, EditorConfig};
//! use flowpad_suitability::{DelayPolicy, SuitabilityPadProvider};
//!
//! let editor = Editor::new(EditorConfig::new());
//! SuitabilityPadProvider::install(&editor, DelayPolicy::DEFAULT);
//!
//! // Entries show up on any selected element
//! let entries = editor.pad().entries_for(&element);
//! assert!(entries.contains_key("append.high-task"));
//!
//! // Click appends a scored task next to the anchor
//! editor.click_entry("append.high-task", &event, anchor_id).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Provider and handlers
mod actions;
mod delay;
mod provider;

// Re-exports
pub use actions::{AppendTaskClick, AppendTaskDragStart};
pub use delay::DelayPolicy;
pub use provider::{entry_class, entry_id, PadCollaborators, SuitabilityPadProvider, ENTRY_GROUP};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
