//! The consumed map-capability seam.
//!
//! The core does not render; a host supplies a [`MapSurface`] (e.g. a
//! Leaflet layer behind FFI, a test double) and calls [`render_graph`] after
//! every handled event. The surface must route clicks back into the core as
//! [`crate::EditorEvent`]s carrying the id it was given here.

use crate::editor::Editor;
use crate::model::{Edge, LatLng, Node};

/// Default initial map viewport.
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 28.6024,
    lng: -81.2001,
};
pub const DEFAULT_ZOOM: u8 = 15;

/// OpenStreetMap tile URL template.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Marker radius in pixels (fixed; markers do not scale with zoom).
pub const NODE_RADIUS: f64 = 8.0;

/// Stroke color and dash pattern for edge lines.
pub const EDGE_COLOR: &str = "black";
pub const EDGE_DASH: &str = "5,5";

/// Rendering capability the host provides.
pub trait MapSurface {
    /// Draws a filled circular marker at the node's position.
    ///
    /// `color` is a CSS color keyword. A non-empty node label is shown as an
    /// always-visible tooltip.
    fn draw_node(&mut self, node: &Node, color: &str);

    /// Draws a line between the two endpoint positions.
    fn draw_edge(&mut self, edge: &Edge, from: LatLng, to: LatLng);
}

/// Redraws the whole session: edges first, so node markers stay on top.
///
/// An edge whose endpoints no longer resolve is skipped rather than treated
/// as an error; load does not re-validate referential integrity.
pub fn render_graph<S: MapSurface>(editor: &Editor, surface: &mut S) {
    let graph = editor.graph();

    for edge in graph.edges() {
        let (Some(n1), Some(n2)) = (graph.node(&edge.node1), graph.node(&edge.node2)) else {
            continue;
        };
        surface.draw_edge(edge, n1.position, n2.position);
    }

    for node in graph.nodes() {
        let Some(color) = editor.display_color(&node.id) else {
            continue;
        };
        surface.draw_node(node, color.as_str());
    }
}
