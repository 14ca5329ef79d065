#![forbid(unsafe_code)]

//! Headless map-graph editor core.
//!
//! Design goals:
//! - deterministic, testable editing semantics (no UI toolkit required)
//! - an explicit mode machine: every click is routed by the active mode
//! - derived display state (marker colors are computed, never stored)
//!
//! The map surface (tiles, markers, hit testing) and the host's file
//! chooser/download mechanics are collaborators reached through narrow seams;
//! see [`view::MapSurface`] and [`persist`].

pub mod editor;
pub mod error;
pub mod model;
pub mod persist;
pub mod selection;
pub mod view;

pub use editor::{Editor, EditorEvent, EventOutcome, LoadSummary, Mode};
pub use error::{Error, Result};
pub use model::{DisplayColor, Edge, GraphModel, LatLng, Node};
pub use persist::{GRAPH_FILE_MEDIA_TYPE, GRAPH_FILE_NAME, load_graph, save_graph};
pub use selection::PendingSelection;

#[cfg(test)]
mod tests;
