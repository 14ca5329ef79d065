use crate::view::{MapSurface, render_graph};
use crate::*;

#[derive(Default)]
struct RecordingSurface {
    nodes: Vec<(String, String)>,
    edges: Vec<String>,
}

impl MapSurface for RecordingSurface {
    fn draw_node(&mut self, node: &Node, color: &str) {
        self.nodes.push((node.id.clone(), color.to_string()));
    }

    fn draw_edge(&mut self, edge: &Edge, _from: LatLng, _to: LatLng) {
        self.edges.push(edge.id.clone());
    }
}

#[test]
fn render_draws_edges_then_nodes_with_derived_colors() {
    let mut editor = Editor::new();
    editor.set_mode(Mode::AddNode);
    editor.set_label_input("A");
    editor
        .handle_event(EditorEvent::MapClick(LatLng::new(10.0, 20.0)))
        .unwrap();
    editor
        .handle_event(EditorEvent::MapClick(LatLng::new(30.0, 40.0)))
        .unwrap();

    let ids: Vec<String> = editor.graph().nodes().map(|n| n.id.clone()).collect();
    editor.set_mode(Mode::ConnectNodes);
    editor
        .handle_event(EditorEvent::NodeClick(ids[0].clone()))
        .unwrap();
    editor
        .handle_event(EditorEvent::NodeClick(ids[1].clone()))
        .unwrap();

    let mut surface = RecordingSurface::default();
    render_graph(&editor, &mut surface);

    assert_eq!(surface.edges.len(), 1);
    assert_eq!(
        surface.nodes,
        vec![
            (ids[0].clone(), "red".to_string()),
            (ids[1].clone(), "blue".to_string()),
        ]
    );
}

#[test]
fn render_highlights_the_pending_node() {
    let mut editor = Editor::new();
    editor.set_mode(Mode::AddNode);
    editor
        .handle_event(EditorEvent::MapClick(LatLng::new(10.0, 20.0)))
        .unwrap();
    let id = editor.graph().nodes().next().unwrap().id.clone();

    editor.set_mode(Mode::ConnectNodes);
    editor
        .handle_event(EditorEvent::NodeClick(id.clone()))
        .unwrap();

    let mut surface = RecordingSurface::default();
    render_graph(&editor, &mut surface);
    assert_eq!(surface.nodes, vec![(id, "yellow".to_string())]);
}

#[test]
fn render_skips_edges_with_missing_endpoints() {
    let mut editor = Editor::new();
    editor
        .load_sync(
            r#"{
                "nodes": [ { "id": "node-aaaaaaa", "latlng": { "lat": 1.0, "lng": 2.0 }, "label": "" } ],
                "edges": [
                    { "id": "edge-dangling", "node1": "node-aaaaaaa", "node2": "node-gone" }
                ]
            }"#,
        )
        .unwrap();

    let mut surface = RecordingSurface::default();
    render_graph(&editor, &mut surface);
    assert!(surface.edges.is_empty());
    assert_eq!(surface.nodes.len(), 1);
}
