//! The two architecture diagrams of the Game of Life API.
//!
//! Both diagrams are hardcoded. Node positions are hand-placed in plot
//! coordinates (y grows upward) and every edge reads as "calls" or "depends on".

use std::{fmt, str::FromStr};

use crate::diagram::{Diagram, GraphBuilder};

/// The architectures that can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Monolithic,
    Microservices,
}

impl Architecture {
    /// Every architecture, in the order they are rendered.
    pub const ALL: [Architecture; 2] = [Self::Monolithic, Self::Microservices];

    /// Title drawn above the diagram.
    pub fn title(self) -> &'static str {
        match self {
            Self::Monolithic => "Monolithic Architecture",
            Self::Microservices => "Microservices Architecture",
        }
    }

    /// Short identifier used for output file names and configuration keys.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Monolithic => "monolithic",
            Self::Microservices => "microservices",
        }
    }

    /// Node fill color used when the configuration does not override it.
    pub fn default_node_color(self) -> &'static str {
        match self {
            Self::Monolithic => "lightblue",
            Self::Microservices => "lightgreen",
        }
    }

    /// Builds the diagram for this architecture.
    pub fn diagram(self) -> Diagram {
        match self {
            Self::Monolithic => monolithic(),
            Self::Microservices => microservices(),
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.slug() == s)
            .ok_or_else(|| format!("unknown architecture `{s}`"))
    }
}

/// Client → API → Middleware → Service Layer, fanning out to Redis and the
/// database.
pub fn monolithic() -> Diagram {
    GraphBuilder::new(Architecture::Monolithic.title())
        .node("Client", (0.0, 3.0))
        .node("API", (0.0, 2.0))
        .node("Middleware", (0.0, 1.0))
        .node("Service Layer", (0.0, 0.0))
        .node("Redis", (-1.0, -1.0))
        .node("Database", (1.0, -1.0))
        .edges([
            ("Client", "API"),
            ("API", "Middleware"),
            ("Middleware", "Service Layer"),
            ("Service Layer", "Redis"),
            ("Service Layer", "Database"),
        ])
        .build()
        .expect("monolithic architecture literals are consistent")
}

/// An API gateway in front of three services sharing Redis, a database and a
/// message broker.
///
/// The authentication service answers back to the gateway, so that pair of
/// nodes is connected in both directions.
pub fn microservices() -> Diagram {
    GraphBuilder::new(Architecture::Microservices.title())
        .node("Client", (0.0, 4.0))
        .node("API Gateway", (0.0, 3.0))
        .node("Authentication Service", (-2.0, 2.0))
        .node("Board Management Service", (0.0, 2.0))
        .node("Game Logic Service", (2.0, 2.0))
        .node("Redis", (0.0, 1.0))
        .node("Database", (-1.0, 0.0))
        .node("Message Broker", (1.0, 0.0))
        .edges([
            ("Client", "API Gateway"),
            ("API Gateway", "Authentication Service"),
            ("API Gateway", "Board Management Service"),
            ("API Gateway", "Game Logic Service"),
            ("Authentication Service", "API Gateway"),
            ("Board Management Service", "Redis"),
            ("Board Management Service", "Database"),
            ("Game Logic Service", "Redis"),
            ("Game Logic Service", "Message Broker"),
            ("Board Management Service", "Message Broker"),
        ])
        .build()
        .expect("microservices architecture literals are consistent")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use golarch_core::geometry::Point;

    use super::*;

    fn labels(diagram: &Diagram) -> BTreeSet<&str> {
        diagram.nodes().map(|n| n.label()).collect()
    }

    fn assert_endpoints_declared(diagram: &Diagram) {
        for edge in diagram.edges() {
            assert!(diagram.contains_node(edge.source().label()));
            assert!(diagram.contains_node(edge.target().label()));
        }
    }

    #[test]
    fn test_monolithic_shape() {
        let diagram = monolithic();

        assert_eq!(diagram.title(), "Monolithic Architecture");
        assert_eq!(diagram.node_count(), 6);
        assert_eq!(diagram.edge_count(), 5);
        assert_eq!(
            labels(&diagram),
            BTreeSet::from([
                "Client",
                "API",
                "Middleware",
                "Service Layer",
                "Redis",
                "Database"
            ])
        );
        assert_endpoints_declared(&diagram);
    }

    #[test]
    fn test_monolithic_chain_fans_out_at_bottom() {
        let diagram = monolithic();

        assert!(diagram.has_edge("Client", "API"));
        assert!(diagram.has_edge("API", "Middleware"));
        assert!(diagram.has_edge("Middleware", "Service Layer"));

        let leaves: Vec<_> = diagram
            .successors("Service Layer")
            .into_iter()
            .map(|n| n.label())
            .collect();
        assert_eq!(leaves, ["Redis", "Database"]);
        assert!(diagram.successors("Redis").is_empty());
        assert!(diagram.successors("Database").is_empty());
    }

    #[test]
    fn test_monolithic_positions() {
        let diagram = monolithic();
        assert_eq!(diagram.node("Client").unwrap().position(), Point::new(0.0, 3.0));
        assert_eq!(diagram.node("Redis").unwrap().position(), Point::new(-1.0, -1.0));
        assert_eq!(diagram.node("Database").unwrap().position(), Point::new(1.0, -1.0));
    }

    #[test]
    fn test_microservices_shape() {
        let diagram = microservices();

        assert_eq!(diagram.title(), "Microservices Architecture");
        assert_eq!(diagram.node_count(), 8);
        assert_eq!(diagram.edge_count(), 10);
        assert_eq!(
            labels(&diagram),
            BTreeSet::from([
                "Client",
                "API Gateway",
                "Authentication Service",
                "Board Management Service",
                "Game Logic Service",
                "Redis",
                "Database",
                "Message Broker"
            ])
        );
        assert_endpoints_declared(&diagram);
    }

    #[test]
    fn test_microservices_authentication_round_trip() {
        let diagram = microservices();
        assert!(diagram.has_edge("API Gateway", "Authentication Service"));
        assert!(diagram.has_edge("Authentication Service", "API Gateway"));
    }

    #[test]
    fn test_construction_is_deterministic() {
        assert_eq!(monolithic(), monolithic());
        assert_eq!(microservices(), microservices());
        assert_ne!(monolithic(), microservices());
    }

    #[test]
    fn test_architecture_metadata() {
        assert_eq!(Architecture::ALL.len(), 2);
        assert_eq!(Architecture::Monolithic.slug(), "monolithic");
        assert_eq!(Architecture::Microservices.to_string(), "microservices");
        assert_eq!(Architecture::Monolithic.default_node_color(), "lightblue");
        assert_eq!(Architecture::Microservices.default_node_color(), "lightgreen");

        for arch in Architecture::ALL {
            assert_eq!(arch.diagram().title(), arch.title());
            assert_eq!(arch.slug().parse::<Architecture>(), Ok(arch));
        }
        assert!("serverless".parse::<Architecture>().is_err());
    }
}
