//! Flowpad diagram model
//!
//! Pure data types shared by the editor runtime and its extensions:
//! - 2D geometry for shape bounds and viewport math
//! - Namespaced element type tags
//! - Business objects carrying semantic attributes
//! - Shapes (transient) and elements (committed to the canvas)
//! - Suitability score tiers attached to appended tasks
//! - The serializable diagram document format

pub mod business;
pub mod document;
pub mod element;
pub mod geometry;
pub mod input;
pub mod score;

pub use business::{BusinessObject, TypeName, TypeNameError, EVENT_TYPE, GATEWAY_TYPE, TASK_TYPE};
pub use document::{Document, ElementRecord};
pub use element::{Element, ElementId, Shape, ShapeSpec};
pub use geometry::{Bounds, Point, Size};
pub use input::PointerEvent;
pub use score::{ScoreError, SuitabilityScore};
