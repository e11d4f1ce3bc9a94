//! Dynkin Core — Cartan types, diagram graph model, display options

pub mod cartan;
pub mod error;
pub mod graph;
pub mod model;
pub mod options;
pub mod render;


pub use cartan::{CartanType, MAX_RANK};
pub use error::{DynkinError, Result};
pub use graph::DynkinDiagram;
pub use model::{Bond, DiagramEdge, NodeId};
pub use options::{DisplayOptions, MarkSpecialNode};
pub use render::{LabelFn, default_label, validate_labels};
