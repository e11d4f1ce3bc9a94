//! Core data structures for Dynkin diagrams

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a simple root. In affine diagrams the affine node is `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// A directed edge `source -> target` of a Dynkin diagram.
///
/// `label` is the magnitude of the Cartan integer `a[target][source]`:
/// an edge `(i, j, 2)` means the root `j` sees `i` through a double bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub label: u32,
}

impl DiagramEdge {
    pub fn new(source: usize, target: usize, label: u32) -> Self {
        DiagramEdge {
            source: NodeId(source),
            target: NodeId(target),
            label,
        }
    }

    /// The same edge with its direction reversed.
    pub fn reversed(&self) -> Self {
        DiagramEdge {
            source: self.target,
            target: self.source,
            label: self.label,
        }
    }

    /// `(source, target, label)` as plain integers.
    pub fn as_tuple(&self) -> (usize, usize, u32) {
        (self.source.0, self.target.0, self.label)
    }
}

impl fmt::Display for DiagramEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.label)
    }
}

/// The bond between two neighbouring nodes `i < j` of a chain diagram,
/// read from the pair of opposite edge labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bond {
    /// `---`: both labels 1.
    Single,
    /// `=>=`: label 2 from `i` to `j`, arrow points at `j`.
    DoubleRight,
    /// `=<=`: label 2 from `j` to `i`, arrow points at `i`.
    DoubleLeft,
    /// `<=>`: label 2 both ways, the degenerate bond of A_1^(1).
    Quadruple,
}

impl Bond {
    /// Classify a bond from the labels of `i -> j` (`forward`) and `j -> i` (`backward`).
    pub fn from_labels(forward: u32, backward: u32) -> Option<Self> {
        match (forward, backward) {
            (1, 1) => Some(Bond::Single),
            (2, 1) => Some(Bond::DoubleRight),
            (1, 2) => Some(Bond::DoubleLeft),
            (2, 2) => Some(Bond::Quadruple),
            _ => None,
        }
    }

    /// Labels `(forward, backward)` carried by the two edges of this bond.
    pub fn labels(&self) -> (u32, u32) {
        match self {
            Bond::Single => (1, 1),
            Bond::DoubleRight => (2, 1),
            Bond::DoubleLeft => (1, 2),
            Bond::Quadruple => (2, 2),
        }
    }

    /// ASCII glyph drawn between two node glyphs.
    pub fn glyph(&self) -> &'static str {
        match self {
            Bond::Single => "---",
            Bond::DoubleRight => "=>=",
            Bond::DoubleLeft => "=<=",
            Bond::Quadruple => "<=>",
        }
    }

    /// The bond of the dual diagram: arrows reversed.
    pub fn dual(&self) -> Self {
        match self {
            Bond::DoubleRight => Bond::DoubleLeft,
            Bond::DoubleLeft => Bond::DoubleRight,
            other => *other,
        }
    }
}
