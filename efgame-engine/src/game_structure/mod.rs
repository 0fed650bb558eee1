use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Formatter;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};

pub use vertex::{RawId, VertexId};

mod vertex;

/// A raw, possibly asymmetric adjacency declaration, as given by the user.
/// Declaration order is preserved, including when deserialized from a JSON
/// object, since it determines the vertex enumeration order of the [Graph]
/// built from it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawGraph {
    decls: Vec<(VertexId, Vec<VertexId>)>,
}

impl RawGraph {
    pub fn new() -> Self {
        Default::default()
    }

    /// Declares a vertex and its outgoing neighbours. Chainable.
    pub fn declare<V, I, N>(mut self, vertex: V, neighbours: I) -> Self
    where
        V: Into<VertexId>,
        I: IntoIterator<Item = N>,
        N: Into<VertexId>,
    {
        self.decls.push((
            vertex.into(),
            neighbours.into_iter().map(|n| n.into()).collect(),
        ));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(VertexId, Vec<VertexId>)> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl serde::Serialize for RawGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.decls.len()))?;
        for (vertex, neighbours) in &self.decls {
            map.serialize_entry(vertex, neighbours)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for RawGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawGraphVisitor;

        impl<'de> Visitor<'de> for RawGraphVisitor {
            type Value = RawGraph;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map from vertex id to a list of neighbour ids")
            }

            // Entries are kept in document order
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawGraph, A::Error> {
                let mut decls = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<VertexId, Vec<VertexId>>()? {
                    decls.push(entry);
                }
                Ok(RawGraph { decls })
            }
        }

        deserializer.deserialize_map(RawGraphVisitor)
    }
}

/// A finite undirected graph with symmetric adjacency, obtained from a
/// [RawGraph] through [Graph::symmetric_closure].
///
/// Vertices are enumerated in first-insertion order. This order is part of
/// the contract: the strategy search commits the first winning answer it
/// finds in enumeration order, so two runs on the same input always produce
/// the same strategy.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    order: Vec<VertexId>,
    adj: HashMap<VertexId, HashSet<VertexId>>,
}

impl Graph {
    /// Builds the symmetric closure of a raw adjacency declaration. For every
    /// declared edge `(u,v)` the result contains both `(u,v)` and `(v,u)`.
    ///
    /// A vertex declared with zero edges gets no entry at all, even if it was
    /// listed explicitly with an empty neighbour set. Callers that need a
    /// complete vertex enumeration must union the raw declaration keys with
    /// the result themselves; adjacency lookups on missing vertices read as
    /// the empty set either way.
    pub fn symmetric_closure(raw: &RawGraph) -> Graph {
        let mut graph = Graph::default();
        for (vertex, neighbours) in raw.iter() {
            for neighbour in neighbours {
                graph.insert_edge(vertex, neighbour);
                graph.insert_edge(neighbour, vertex);
            }
        }
        graph
    }

    fn insert_edge(&mut self, from: &VertexId, to: &VertexId) {
        let neighbours = match self.adj.entry(from.clone()) {
            Entry::Vacant(entry) => {
                self.order.push(from.clone());
                entry.insert(HashSet::new())
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };
        neighbours.insert(to.clone());
    }

    /// The vertices of the graph in the published enumeration order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// True iff the edge `(u,v)` exists. A vertex without an adjacency entry
    /// has an empty neighbour set; asking about it is not an error.
    pub fn has_edge(&self, u: &VertexId, v: &VertexId) -> bool {
        self.adj.get(u).map_or(false, |neighbours| neighbours.contains(v))
    }

    pub fn neighbours(&self, v: &VertexId) -> impl Iterator<Item = &VertexId> {
        self.adj.get(v).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use crate::game_structure::{Graph, RawGraph, VertexId};

    #[test]
    fn closure_of_empty_graph_is_empty() {
        let graph = Graph::symmetric_closure(&RawGraph::new());
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn closure_inserts_reverse_edges() {
        let raw = RawGraph::new().declare("a", vec!["b", "c"]);
        let graph = Graph::symmetric_closure(&raw);

        let (a, b, c) = (VertexId::from("a"), VertexId::from("b"), VertexId::from("c"));
        assert!(graph.has_edge(&a, &b) && graph.has_edge(&b, &a));
        assert!(graph.has_edge(&a, &c) && graph.has_edge(&c, &a));
        assert!(!graph.has_edge(&b, &c));
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn every_edge_has_its_reverse() {
        let raw = RawGraph::new()
            .declare(1, vec![2, 3])
            .declare(2, vec![3, 4, 5])
            .declare(3, vec![4, 5])
            .declare(4, vec![5]);
        let graph = Graph::symmetric_closure(&raw);

        for u in graph.vertices() {
            for v in graph.neighbours(u) {
                assert!(graph.has_edge(v, u), "missing reverse of ({}, {})", u, v);
            }
        }
    }

    #[test]
    fn closure_of_symmetric_graph_is_a_fixed_point() {
        let raw = RawGraph::new().declare("a", vec!["b"]).declare("b", vec!["c"]);
        let graph = Graph::symmetric_closure(&raw);

        // Re-declare the closed graph in its own enumeration order
        let mut again = RawGraph::new();
        for u in graph.vertices() {
            let neighbours: Vec<_> = graph.neighbours(u).cloned().collect();
            again = again.declare(u.clone(), neighbours);
        }
        assert_eq!(Graph::symmetric_closure(&again), graph);
    }

    #[test]
    fn zero_edge_declaration_yields_no_entry() {
        let raw = RawGraph::new()
            .declare("a", vec!["b"])
            .declare("lonely", Vec::<VertexId>::new());
        let graph = Graph::symmetric_closure(&raw);

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.vertices().all(|v| v != &VertexId::from("lonely")));
    }

    #[test]
    fn edge_target_only_vertex_gets_entry_via_reverse_insertion() {
        // c is declared with no edges, but is the target of a's and b's edges
        let raw = RawGraph::new()
            .declare("a", vec!["b", "c"])
            .declare("b", vec!["c"])
            .declare("c", Vec::<VertexId>::new());
        let graph = Graph::symmetric_closure(&raw);

        let c = VertexId::from("c");
        assert!(graph.vertices().any(|v| v == &c));
        assert!(graph.has_edge(&c, &VertexId::from("a")));
    }

    #[test]
    fn vertices_enumerate_in_first_insertion_order() {
        let raw = RawGraph::new().declare(1, vec![2, 3]).declare(2, vec![4]);
        let graph = Graph::symmetric_closure(&raw);

        let order: Vec<_> = graph.vertices().map(|v| v.to_string()).collect();
        assert_eq!(order, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn missing_vertices_read_as_empty_adjacency() {
        let graph = Graph::symmetric_closure(&RawGraph::new().declare("a", vec!["b"]));
        assert!(!graph.has_edge(&VertexId::from("x"), &VertexId::from("a")));
        assert_eq!(graph.neighbours(&VertexId::from("x")).count(), 0);
    }

    #[test]
    fn raw_graph_serializes_back_to_a_map() {
        let raw = RawGraph::new().declare("a", vec!["b"]).declare(1, vec![2]);
        assert_eq!(
            serde_json::to_string(&raw).unwrap(),
            r#"{"a":["b"],"1":[2]}"#
        );
    }

    #[test]
    fn raw_graph_deserializes_in_document_order() {
        let raw: RawGraph =
            serde_json::from_str(r#"{"b": ["c"], "a": ["b"], "c": []}"#).unwrap();
        let declared: Vec<_> = raw.iter().map(|(v, _)| v.to_string()).collect();
        assert_eq!(declared, vec!["b", "a", "c"]);
    }
}
