mod multi;
mod single;
use multi::*;
use single::*;

use crate::config::LayoutConfig;
use crate::ir::{Edge, Graph, Node, NodeKind};
use serde::Serialize;

/// Which placement strategy produced a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPath {
    Empty,
    SingleLevel,
    MultiLevel,
}

/// A graph whose nodes carry final positions. Read-only once built.
#[derive(Debug, Clone)]
pub struct Layout {
    graph: Graph,
    path: LayoutPath,
}

impl Layout {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.graph.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.graph.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn path(&self) -> LayoutPath {
        self.path
    }

    pub fn is_empty(&self) -> bool {
        self.graph.nodes.is_empty()
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

pub fn compute_layout(mut graph: Graph, config: &LayoutConfig) -> Layout {
    let path = if graph.nodes.is_empty() {
        LayoutPath::Empty
    } else if graph.max_level() > 0 {
        layout_multi_level(&mut graph, config);
        LayoutPath::MultiLevel
    } else {
        layout_single_level(&mut graph, config);
        LayoutPath::SingleLevel
    };

    for node in &graph.nodes {
        tracing::trace!(
            id = %node.id,
            x = node.x,
            y = node.y,
            width = node.width,
            height = node.height,
            "placed node"
        );
    }
    tracing::debug!(?path, nodes = graph.nodes.len(), "computed layout");

    Layout { graph, path }
}

fn place(node: &mut Node, x: f32, y: f32, width: f32, height: f32) {
    node.x = x;
    node.y = y;
    node.width = width;
    node.height = height;
}

/// Vertical offset that centers a terminal marker against a regular box.
fn terminal_offset(config: &LayoutConfig) -> f32 {
    (config.node_height - config.terminal_size) / 2.0
}

fn find_kind<'a>(nodes: &'a mut [Node], kind: &NodeKind) -> Option<&'a mut Node> {
    nodes.iter_mut().find(|node| &node.kind == kind)
}
