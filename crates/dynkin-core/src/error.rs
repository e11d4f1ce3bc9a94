//! Error type shared by the diagram model and the root-system implementations

use crate::cartan::MAX_RANK;
use crate::model::NodeId;

/// Errors raised while building Cartan types, diagrams, or display options.
#[derive(thiserror::Error, Debug)]
pub enum DynkinError {
    #[error("invalid rank {rank} for type {letter}: rank must be between 1 and {}", MAX_RANK)]
    InvalidRank { letter: char, rank: usize },

    #[error("unsupported Cartan type {0:?}")]
    UnsupportedType(String),

    #[error("node {0} is not in the diagram")]
    UnknownNode(NodeId),

    #[error("no edge from node {from} to node {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("label {label:?} is assigned to both node {first} and node {second}")]
    NonInjectiveLabel {
        label: String,
        first: NodeId,
        second: NodeId,
    },

    #[error("no label given for node {0}")]
    MissingLabel(NodeId),

    #[error("invalid value {value:?} for display option {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed display options: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DynkinError>;
