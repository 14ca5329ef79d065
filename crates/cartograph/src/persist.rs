//! Save/load for the single-file graph document.
//!
//! The wire format is the editor's `graph_data.json`: a node list (id,
//! latlng, label) and an edge list (id, node1, node2). Colors are never
//! persisted; they are re-derived from label presence on load, and a legacy
//! `color` field in older documents is ignored.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Edge, GraphModel, LatLng, Node};

/// Conventional download name for a saved graph.
pub const GRAPH_FILE_NAME: &str = "graph_data.json";

/// Media type of the saved document.
pub const GRAPH_FILE_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    latlng: LatLng,
    #[serde(default)]
    label: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    id: String,
    node1: String,
    node2: String,
}

/// Serializes the full graph as pretty-printed JSON.
pub fn save_graph(graph: &GraphModel) -> String {
    let file = GraphFile {
        nodes: graph
            .nodes()
            .map(|n| NodeRecord {
                id: n.id.clone(),
                latlng: n.position,
                label: n.label.clone(),
            })
            .collect(),
        edges: graph
            .edges()
            .map(|e| EdgeRecord {
                id: e.id.clone(),
                node1: e.node1.clone(),
                node2: e.node2.clone(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&file).expect("graph document serializes to JSON")
}

/// Parses a graph document into node and edge collections.
///
/// Fails with [`Error::Format`] when the text is not the expected structure.
/// Edge referential integrity is NOT re-validated here: a document with
/// dangling edge references loads fine, and such edges are skipped at render
/// time instead.
pub fn load_graph(text: &str) -> Result<(Vec<Node>, Vec<Edge>)> {
    let file: GraphFile = serde_json::from_str(text).map_err(|err| Error::Format {
        message: err.to_string(),
    })?;

    let nodes = file
        .nodes
        .into_iter()
        .map(|r| Node {
            id: r.id,
            position: r.latlng,
            label: r.label,
        })
        .collect();
    let edges = file
        .edges
        .into_iter()
        .map(|r| Edge {
            id: r.id,
            node1: r.node1,
            node2: r.node2,
        })
        .collect();
    Ok((nodes, edges))
}
