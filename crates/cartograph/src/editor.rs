//! The editing session: mode machine, click dispatch, save/load.

use crate::error::{Error, Result};
use crate::model::{DisplayColor, Edge, GraphModel, LatLng, Node};
use crate::persist;
use crate::selection::PendingSelection;

/// The active interaction behavior governing how clicks are interpreted.
///
/// Modes change only through [`Editor::set_mode`], with one exception: a
/// completed delete action drops back to [`Mode::Idle`] on its own, so a
/// second click cannot delete by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Clicks do not mutate the graph.
    #[default]
    Idle,
    /// Background clicks place a node at the clicked coordinate.
    AddNode,
    /// Node clicks select a first endpoint, then complete an edge.
    ConnectNodes,
    /// The next node or edge click removes that entity.
    Delete,
}

/// A click reported by the map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Background click at a geographic coordinate.
    MapClick(LatLng),
    /// Click on a node marker, reported with the node's id.
    NodeClick(String),
    /// Click on an edge line, reported with the edge's id.
    EdgeClick(String),
}

/// What a handled event did, so a host can surface notices.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    NodeAdded(Node),
    /// A connect gesture started; the id renders yellow until it resolves.
    SelectionStarted(String),
    EdgeAdded(Edge),
    NodeRemoved(String),
    EdgeRemoved(String),
    /// No handler for the `(mode, event)` pair.
    Ignored,
}

/// Node/edge counts of a freshly loaded document, for the host's success
/// notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub nodes: usize,
    pub edges: usize,
}

/// A single-user editing session over one in-memory graph.
///
/// All mutation happens synchronously inside [`Editor::handle_event`] or
/// [`Editor::load_sync`]; there is no background work, so the session needs
/// no locking.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    graph: GraphModel,
    selection: PendingSelection,
    mode: Mode,
    label_input: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active mode, for the host to distinguish among its mode controls.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the active mode.
    ///
    /// Any in-progress connect gesture is abandoned so a stale pending id
    /// cannot leak into a later gesture.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(?mode, "mode change");
        }
        self.selection.cancel();
        self.mode = mode;
    }

    /// The label applied to the next added node.
    pub fn label_input(&self) -> &str {
        &self.label_input
    }

    pub fn set_label_input(&mut self, label: impl Into<String>) {
        self.label_input = label.into();
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn selection(&self) -> &PendingSelection {
        &self.selection
    }

    /// Routes one click to the handler for the current mode.
    ///
    /// Pairs with no handler (a node click while idle, a background click in
    /// connect mode) return [`EventOutcome::Ignored`] and change nothing.
    pub fn handle_event(&mut self, event: EditorEvent) -> Result<EventOutcome> {
        match (self.mode, event) {
            (Mode::AddNode, EditorEvent::MapClick(position)) => {
                // Taking the label clears the input, so consecutive adds
                // without re-typing default to unlabeled.
                let label = std::mem::take(&mut self.label_input);
                let node = self.graph.add_node(position, label);
                Ok(EventOutcome::NodeAdded(node))
            }
            (Mode::ConnectNodes, EditorEvent::NodeClick(node_id)) => self.connect_click(node_id),
            (Mode::Delete, EditorEvent::NodeClick(node_id)) => {
                let removed = self.graph.remove_node(&node_id);
                self.mode = Mode::Idle;
                Ok(if removed {
                    EventOutcome::NodeRemoved(node_id)
                } else {
                    EventOutcome::Ignored
                })
            }
            (Mode::Delete, EditorEvent::EdgeClick(edge_id)) => {
                let removed = self.graph.remove_edge(&edge_id);
                self.mode = Mode::Idle;
                Ok(if removed {
                    EventOutcome::EdgeRemoved(edge_id)
                } else {
                    EventOutcome::Ignored
                })
            }
            // Background clicks in delete mode are no-ops and stay in delete
            // mode; only a completed delete leaves it.
            _ => Ok(EventOutcome::Ignored),
        }
    }

    fn connect_click(&mut self, node_id: String) -> Result<EventOutcome> {
        let Some(first) = self.selection.resolve() else {
            self.selection.begin(node_id.clone());
            return Ok(EventOutcome::SelectionStarted(node_id));
        };
        if first == node_id {
            // resolve() already cleared the selection, so the node's color
            // reverts to its label-derived value on the next render.
            return Err(Error::SelfConnection { node_id });
        }
        let edge = self.graph.add_edge(&first, &node_id)?;
        Ok(EventOutcome::EdgeAdded(edge))
    }

    /// Fill color for a node marker, derived at query time.
    ///
    /// The sole pending endpoint of a connect gesture renders yellow; that
    /// override disappears when the selection resolves or is cancelled.
    /// Returns `None` for unknown ids.
    pub fn display_color(&self, node_id: &str) -> Option<DisplayColor> {
        let node = self.graph.node(node_id)?;
        if self.selection.current() == Some(node_id) {
            return Some(DisplayColor::Yellow);
        }
        Some(DisplayColor::for_label(&node.label))
    }

    /// Serializes the current graph as a stable, human-readable JSON
    /// document. Colors are never persisted.
    pub fn save(&self) -> String {
        persist::save_graph(&self.graph)
    }

    /// Synchronous variant of [`Editor::load`].
    ///
    /// The entire graph is replaced in one swap after the document parses; a
    /// parse failure leaves the graph, mode, and selection untouched. On
    /// success the session restarts in idle mode with no pending selection.
    pub fn load_sync(&mut self, text: &str) -> Result<LoadSummary> {
        let (nodes, edges) = match persist::load_graph(text) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(%err, "graph load rejected");
                return Err(err);
            }
        };
        let summary = LoadSummary {
            nodes: nodes.len(),
            edges: edges.len(),
        };
        self.graph.replace_all(nodes, edges);
        self.selection.cancel();
        self.mode = Mode::Idle;
        tracing::debug!(nodes = summary.nodes, edges = summary.edges, "graph loaded");
        Ok(summary)
    }

    /// Replaces the session graph with a document produced by
    /// [`Editor::save`].
    ///
    /// Reading file contents happens off the interaction timeline; this is
    /// the single suspension point, and the swap applies atomically once the
    /// content is fully read and parsed.
    pub async fn load(&mut self, text: &str) -> Result<LoadSummary> {
        self.load_sync(text)
    }
}
