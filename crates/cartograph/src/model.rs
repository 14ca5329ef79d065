//! Graph entities and the authoritative node/edge collections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A geographic coordinate in degrees.
///
/// Coordinates are taken from map clicks as-is; the editor does not validate
/// geographic plausibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Fill color for a rendered node marker.
///
/// Colors are a pure function of `(label presence, selection status)` and are
/// recomputed at query time; they are never stored or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    /// Unlabeled node.
    Blue,
    /// Labeled node.
    Red,
    /// Sole pending endpoint of an in-progress connect gesture.
    Yellow,
}

impl DisplayColor {
    /// CSS color keyword understood by map surfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayColor::Blue => "blue",
            DisplayColor::Red => "red",
            DisplayColor::Yellow => "yellow",
        }
    }

    /// The label-derived color, ignoring any selection override.
    pub fn for_label(label: &str) -> Self {
        if label.is_empty() {
            DisplayColor::Blue
        } else {
            DisplayColor::Red
        }
    }
}

/// A labeled point entity anchored to a map coordinate.
///
/// Id and position are fixed at creation; there is no node-move operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub position: LatLng,
    /// Optional text; the empty string means "no label".
    pub label: String,
}

impl Node {
    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }
}

/// An unordered connection between two distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub node1: String,
    pub node2: String,
}

impl Edge {
    /// True when either endpoint is `node_id`.
    pub fn touches(&self, node_id: &str) -> bool {
        self.node1 == node_id || self.node2 == node_id
    }
}

fn next_id(kind: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let short: String = hex.chars().take(7).collect();
    format!("{kind}-{short}")
}

/// The authoritative node and edge collections.
///
/// Both collections keep insertion order and are addressable by id. Every
/// mutation is all-or-nothing; the cascade in [`GraphModel::remove_node`] is
/// the only multi-collection write.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node with a fresh unique id.
    ///
    /// Positions are not checked for duplicates; two nodes may share a
    /// coordinate.
    pub fn add_node(&mut self, position: LatLng, label: impl Into<String>) -> Node {
        let node = Node {
            id: next_id("node"),
            position,
            label: label.into(),
        };
        tracing::debug!(id = %node.id, "add node");
        self.nodes.insert(node.id.clone(), node.clone());
        node
    }

    /// Appends an edge between two existing, distinct nodes.
    ///
    /// Parallel edges between the same pair are permitted; self-connections
    /// are rejected so they can be surfaced to the user.
    pub fn add_edge(&mut self, node1: &str, node2: &str) -> Result<Edge> {
        if node1 == node2 {
            return Err(Error::SelfConnection {
                node_id: node1.to_string(),
            });
        }
        for id in [node1, node2] {
            if !self.nodes.contains_key(id) {
                return Err(Error::UnknownNode {
                    node_id: id.to_string(),
                });
            }
        }

        let edge = Edge {
            id: next_id("edge"),
            node1: node1.to_string(),
            node2: node2.to_string(),
        };
        tracing::debug!(id = %edge.id, node1 = %node1, node2 = %node2, "add edge");
        self.edges.insert(edge.id.clone(), edge.clone());
        Ok(edge)
    }

    /// Removes a node and every edge incident to it.
    ///
    /// Returns `false` when the id is absent (a stale click, not an error).
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        if self.nodes.shift_remove(node_id).is_none() {
            return false;
        }
        self.edges.retain(|_, e| !e.touches(node_id));
        tracing::debug!(id = %node_id, "remove node");
        true
    }

    /// Removes a single edge by id; `false` when absent.
    pub fn remove_edge(&mut self, edge_id: &str) -> bool {
        let removed = self.edges.shift_remove(edge_id).is_some();
        if removed {
            tracing::debug!(id = %edge_id, "remove edge");
        }
        removed
    }

    /// Wholesale swap used by load.
    ///
    /// The replacement collections are fully built before the previous ones
    /// are discarded; callers validate input before calling this.
    pub fn replace_all(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        self.edges = edges.into_iter().map(|e| (e.id.clone(), e)).collect();
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
