//! The diagram model: named nodes with fixed positions and directed edges.
//!
//! A [`Diagram`] is assembled with a [`GraphBuilder`], which validates the
//! declared nodes and edges before anything is handed to the renderer. Once
//! built, a diagram is immutable.
//!
//! ```
//! use golarch::diagram::GraphBuilder;
//!
//! let diagram = GraphBuilder::new("Two Tier")
//!     .node("Client", (0.0, 1.0))
//!     .node("Server", (0.0, 0.0))
//!     .edge("Client", "Server")
//!     .build()
//!     .expect("literals are consistent");
//!
//! assert_eq!(diagram.node_count(), 2);
//! assert!(diagram.has_edge("Client", "Server"));
//! ```

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use thiserror::Error;

use golarch_core::geometry::Point;

/// Reasons a [`GraphBuilder`] refuses to build a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("edge `{from}` -> `{to}` references undeclared node `{missing}`")]
    UndeclaredEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge `{from}` -> `{to}` is declared more than once")]
    DuplicateEdge { from: String, to: String },

    #[error("edge `{0}` -> `{0}` connects a node to itself")]
    SelfLoop(String),

    #[error("node `{label}` has a non-finite position")]
    InvalidPosition { label: String },
}

/// A labelled component placed at a fixed layout coordinate.
///
/// Coordinates are plot coordinates: x grows to the right and y grows upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    position: Point,
}

impl Node {
    pub fn new(label: impl Into<String>, position: impl Into<Point>) -> Self {
        Self {
            label: label.into(),
            position: position.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A directed edge between two nodes of a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a> {
    source: &'a Node,
    target: &'a Node,
}

impl<'a> Edge<'a> {
    pub fn source(&self) -> &'a Node {
        self.source
    }

    pub fn target(&self) -> &'a Node {
        self.target
    }
}

/// A titled, immutable directed graph of positioned nodes.
///
/// Nodes and edges are kept in declaration order. Two diagrams are equal when
/// their titles, nodes (with positions) and edges match in that order.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    graph: DiGraph<Node, ()>,
    indices: IndexMap<String, NodeIndex>,
}

impl Diagram {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Returns the node with the given label, if declared.
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.indices.get(label).map(|idx| &self.graph[*idx])
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.indices.contains_key(label)
    }

    /// Returns the edges in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.graph.edge_references().map(|edge| Edge {
            source: &self.graph[edge.source()],
            target: &self.graph[edge.target()],
        })
    }

    /// Returns true if an edge runs from `source` to `target`.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.indices.get(source), self.indices.get(target)) {
            (Some(s), Some(t)) => self.graph.find_edge(*s, *t).is_some(),
            _ => false,
        }
    }

    /// Returns the nodes that `label` has an edge to, in declaration order.
    pub fn successors(&self, label: &str) -> Vec<&Node> {
        self.edges()
            .filter(|edge| edge.source().label() == label)
            .map(|edge| edge.target())
            .collect()
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.nodes().eq(other.nodes())
            && self
                .edges()
                .map(|e| (e.source().label(), e.target().label()))
                .eq(other
                    .edges()
                    .map(|e| (e.source().label(), e.target().label())))
    }
}

/// Collects node and edge declarations and validates them into a [`Diagram`].
///
/// Validation happens in [`GraphBuilder::build`], so declarations may appear in
/// any order as long as the final set is consistent.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    title: String,
    nodes: Vec<Node>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declares a node at the given plot coordinate.
    pub fn node(mut self, label: impl Into<String>, position: impl Into<Point>) -> Self {
        self.nodes.push(Node::new(label, position));
        self
    }

    /// Declares a directed edge between two node labels.
    pub fn edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push((source.into(), target.into()));
        self
    }

    /// Declares several directed edges at once.
    pub fn edges<I, S, T>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.edges
            .extend(edges.into_iter().map(|(s, t)| (s.into(), t.into())));
        self
    }

    /// Validates the declarations and builds the diagram.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] when a node label is repeated, a position is
    /// not finite, or an edge is repeated, loops onto its own node or names a
    /// node that was never declared.
    pub fn build(self) -> Result<Diagram, GraphError> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices = IndexMap::with_capacity(self.nodes.len());

        for node in self.nodes {
            if !node.position().is_finite() {
                return Err(GraphError::InvalidPosition { label: node.label });
            }
            if indices.contains_key(node.label()) {
                return Err(GraphError::DuplicateNode(node.label));
            }

            let label = node.label.clone();
            let idx = graph.add_node(node);
            indices.insert(label, idx);
        }

        for (source, target) in self.edges {
            let lookup = |label: &str| indices.get(label).copied();

            let (Some(s), Some(t)) = (lookup(&source), lookup(&target)) else {
                let missing = if lookup(&source).is_none() {
                    source.clone()
                } else {
                    target.clone()
                };
                return Err(GraphError::UndeclaredEndpoint {
                    from: source,
                    to: target,
                    missing,
                });
            };

            if s == t {
                return Err(GraphError::SelfLoop(source));
            }
            if graph.find_edge(s, t).is_some() {
                return Err(GraphError::DuplicateEdge {
                    from: source,
                    to: target,
                });
            }

            graph.add_edge(s, t, ());
        }

        let diagram = Diagram {
            title: self.title,
            graph,
            indices,
        };

        debug!(
            title = diagram.title(),
            nodes_count = diagram.node_count(),
            edges_count = diagram.edge_count();
            "Diagram built"
        );
        trace!(diagram:?; "Built diagram");

        Ok(diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> GraphBuilder {
        GraphBuilder::new("Chain")
            .node("A", (0.0, 2.0))
            .node("B", (0.0, 1.0))
            .node("C", (0.0, 0.0))
            .edges([("A", "B"), ("B", "C")])
    }

    #[test]
    fn test_build_keeps_declaration_order() {
        let diagram = chain().build().unwrap();

        let labels: Vec<_> = diagram.nodes().map(Node::label).collect();
        assert_eq!(labels, ["A", "B", "C"]);

        let edges: Vec<_> = diagram
            .edges()
            .map(|e| (e.source().label(), e.target().label()))
            .collect();
        assert_eq!(edges, [("A", "B"), ("B", "C")]);
    }

    #[test]
    fn test_node_lookup() {
        let diagram = chain().build().unwrap();

        assert_eq!(diagram.node("B").unwrap().position(), Point::new(0.0, 1.0));
        assert!(diagram.node("Z").is_none());
        assert!(diagram.contains_node("C"));
        assert!(!diagram.contains_node("c"));
    }

    #[test]
    fn test_has_edge_is_directed() {
        let diagram = chain().build().unwrap();

        assert!(diagram.has_edge("A", "B"));
        assert!(!diagram.has_edge("B", "A"));
        assert!(!diagram.has_edge("A", "Missing"));
    }

    #[test]
    fn test_successors() {
        let diagram = GraphBuilder::new("Fan")
            .node("Hub", (0.0, 0.0))
            .node("Left", (-1.0, -1.0))
            .node("Right", (1.0, -1.0))
            .edges([("Hub", "Left"), ("Hub", "Right")])
            .build()
            .unwrap();

        let successors: Vec<_> = diagram.successors("Hub").into_iter().map(Node::label).collect();
        assert_eq!(successors, ["Left", "Right"]);
        assert!(diagram.successors("Left").is_empty());
    }

    #[test]
    fn test_undeclared_target_is_rejected() {
        let err = chain().edge("C", "D").build().unwrap_err();
        assert_eq!(
            err,
            GraphError::UndeclaredEndpoint {
                from: "C".to_string(),
                to: "D".to_string(),
                missing: "D".to_string(),
            }
        );
    }

    #[test]
    fn test_undeclared_source_is_rejected() {
        let err = chain().edge("X", "A").build().unwrap_err();
        assert!(matches!(
            err,
            GraphError::UndeclaredEndpoint { ref missing, .. } if missing == "X"
        ));
        assert_eq!(
            err.to_string(),
            "edge `X` -> `A` references undeclared node `X`"
        );
    }

    #[test]
    fn test_duplicate_node_is_rejected() {
        let err = chain().node("A", (5.0, 5.0)).build().unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("A".to_string()));
    }

    #[test]
    fn test_duplicate_edge_is_rejected() {
        let err = chain().edge("A", "B").build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
    }

    #[test]
    fn test_reverse_edge_is_distinct() {
        let diagram = chain().edge("B", "A").build().unwrap();
        assert!(diagram.has_edge("A", "B"));
        assert!(diagram.has_edge("B", "A"));
        assert_eq!(diagram.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let err = chain().edge("B", "B").build().unwrap_err();
        assert_eq!(err, GraphError::SelfLoop("B".to_string()));
    }

    #[test]
    fn test_non_finite_position_is_rejected() {
        let err = GraphBuilder::new("Bad")
            .node("Nowhere", (f32::NAN, 0.0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidPosition {
                label: "Nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_empty_diagram() {
        let diagram = GraphBuilder::new("Empty").build().unwrap();
        assert_eq!(diagram.node_count(), 0);
        assert_eq!(diagram.edge_count(), 0);
        assert_eq!(diagram.title(), "Empty");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(chain().build().unwrap(), chain().build().unwrap());

        let moved = GraphBuilder::new("Chain")
            .node("A", (0.0, 2.5))
            .node("B", (0.0, 1.0))
            .node("C", (0.0, 0.0))
            .edges([("A", "B"), ("B", "C")])
            .build()
            .unwrap();
        assert_ne!(chain().build().unwrap(), moved);
    }
}
