//! Dynkin diagram graph wrapping petgraph::StableDiGraph

use std::collections::{BTreeMap, HashMap};

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use crate::cartan::CartanType;
use crate::error::{DynkinError, Result};
use crate::model::{Bond, DiagramEdge, NodeId};

/// A Dynkin diagram: a directed graph with at most one labeled edge per
/// ordered pair of nodes, optionally tagged with the Cartan type it encodes.
#[derive(Clone)]
pub struct DynkinDiagram {
    inner: StableDiGraph<NodeId, u32>,
    index: BTreeMap<NodeId, NodeIndex>,
    cartan_type: Option<CartanType>,
}

impl std::fmt::Debug for DynkinDiagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynkinDiagram")
            .field("cartan_type", &self.cartan_type)
            .field("node_count", &self.inner.node_count())
            .field("edges", &self.edges())
            .finish()
    }
}

impl PartialEq for DynkinDiagram {
    /// Diagrams are equal when they carry the same nodes and labeled edges;
    /// the Cartan type tag is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges() == other.edges()
    }
}

impl DynkinDiagram {
    pub fn new() -> Self {
        DynkinDiagram {
            inner: StableDiGraph::new(),
            index: BTreeMap::new(),
            cartan_type: None,
        }
    }

    /// An edgeless diagram on the index set of `cartan_type`, tagged with it.
    pub fn for_cartan_type(cartan_type: CartanType) -> Self {
        let mut diagram = Self::new();
        for node in cartan_type.index_set() {
            diagram.add_node(node.0);
        }
        diagram.cartan_type = Some(cartan_type);
        diagram
    }

    /// The Cartan type this diagram was built for.
    pub fn cartan_type(&self) -> Option<&CartanType> {
        self.cartan_type.as_ref()
    }

    pub fn set_cartan_type(&mut self, cartan_type: CartanType) {
        self.cartan_type = Some(cartan_type);
    }

    /// Add a node if it is not present yet.
    pub fn add_node(&mut self, id: usize) -> NodeId {
        let id = NodeId(id);
        if !self.index.contains_key(&id) {
            let idx = self.inner.add_node(id);
            self.index.insert(id, idx);
        }
        id
    }

    /// Add the edge `i -> j` with `label`, and `j -> i` with label 1 unless
    /// that edge already exists. Missing nodes are created.
    pub fn add_edge(&mut self, i: usize, j: usize, label: u32) {
        let i = self.add_node(i);
        let j = self.add_node(j);
        let (a, b) = (self.index[&i], self.index[&j]);
        self.inner.update_edge(a, b, label);
        if self.inner.find_edge(b, a).is_none() {
            self.inner.add_edge(b, a, 1);
        }
    }

    /// Overwrite the label of an existing edge `i -> j`.
    pub fn set_edge_label(&mut self, i: usize, j: usize, label: u32) -> Result<()> {
        let (i, j) = (NodeId(i), NodeId(j));
        let a = self.node_index(i)?;
        let b = self.node_index(j)?;
        let edge = self
            .inner
            .find_edge(a, b)
            .ok_or(DynkinError::MissingEdge { from: i, to: j })?;
        self.inner[edge] = label;
        Ok(())
    }

    /// Label of the edge `i -> j`, if present.
    pub fn edge_label(&self, i: usize, j: usize) -> Option<u32> {
        let a = *self.index.get(&NodeId(i))?;
        let b = *self.index.get(&NodeId(j))?;
        self.inner.find_edge(a, b).map(|e| self.inner[e])
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.edge_label(i, j).is_some()
    }

    pub fn has_node(&self, id: usize) -> bool {
        self.index.contains_key(&NodeId(id))
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.keys().copied()
    }

    /// All edges, sorted by `(source, target, label)`.
    pub fn edges(&self) -> Vec<DiagramEdge> {
        let mut edges: Vec<DiagramEdge> = self
            .inner
            .edge_indices()
            .filter_map(|e| {
                let (a, b) = self.inner.edge_endpoints(e)?;
                Some(DiagramEdge {
                    source: self.inner[a],
                    target: self.inner[b],
                    label: self.inner[e],
                })
            })
            .collect();
        edges.sort();
        edges
    }

    /// Edges leaving `node`, sorted by target.
    pub fn edges_from(&self, node: usize) -> Vec<DiagramEdge> {
        let node = NodeId(node);
        let Some(&idx) = self.index.get(&node) else {
            return Vec::new();
        };
        let mut edges: Vec<DiagramEdge> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| DiagramEdge {
                source: node,
                target: self.inner[e.target()],
                label: *e.weight(),
            })
            .collect();
        edges.sort();
        edges
    }

    /// Symbolic bond between `i` and `j` read in that order.
    pub fn bond(&self, i: usize, j: usize) -> Option<Bond> {
        Bond::from_labels(self.edge_label(i, j)?, self.edge_label(j, i)?)
    }

    /// The dual diagram: every edge reversed, tagged with the dual type.
    pub fn dual(&self) -> DynkinDiagram {
        let mut dual = DynkinDiagram::new();
        for node in self.nodes() {
            dual.add_node(node.0);
        }
        for edge in self.edges() {
            let edge = edge.reversed();
            let (a, b) = (dual.index[&edge.source], dual.index[&edge.target]);
            dual.inner.update_edge(a, b, edge.label);
        }
        dual.cartan_type = self.cartan_type.as_ref().map(CartanType::dual);
        dual
    }

    /// Rename every node through `f`. Fails when `f` maps two nodes to the same id.
    pub fn relabel(&self, f: impl Fn(NodeId) -> NodeId) -> Result<DynkinDiagram> {
        let mut mapping: HashMap<NodeId, NodeId> = HashMap::new();
        let mut seen: HashMap<NodeId, NodeId> = HashMap::new();
        for node in self.nodes() {
            let image = f(node);
            if let Some(&first) = seen.get(&image) {
                return Err(DynkinError::NonInjectiveLabel {
                    label: image.to_string(),
                    first,
                    second: node,
                });
            }
            seen.insert(image, node);
            mapping.insert(node, image);
        }

        let mut relabeled = DynkinDiagram::new();
        for node in self.nodes() {
            relabeled.add_node(mapping[&node].0);
        }
        for edge in self.edges() {
            let a = relabeled.index[&mapping[&edge.source]];
            let b = relabeled.index[&mapping[&edge.target]];
            relabeled.inner.update_edge(a, b, edge.label);
        }
        relabeled.cartan_type = self.cartan_type.clone();
        Ok(relabeled)
    }

    /// Cartan matrix in `nodes()` order: `a[i][i] = 2`, `a[i][j] = -label(j -> i)`.
    pub fn cartan_matrix(&self) -> Vec<Vec<i64>> {
        let nodes: Vec<NodeId> = self.nodes().collect();
        nodes
            .iter()
            .map(|&i| {
                nodes
                    .iter()
                    .map(|&j| {
                        if i == j {
                            2
                        } else {
                            self.edge_label(j.0, i.0).map_or(0, |l| -i64::from(l))
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn node_index(&self, id: NodeId) -> Result<NodeIndex> {
        self.index.get(&id).copied().ok_or(DynkinError::UnknownNode(id))
    }
}

impl Default for DynkinDiagram {
    fn default() -> Self {
        Self::new()
    }
}
