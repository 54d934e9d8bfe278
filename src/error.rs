use crate::graph::EdgeKind;
use thiserror::Error;

/// Errors that can occur when converting a flow document into a `FlowDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowConversionError {
    #[error("Invalid flow document: {0}")]
    ValidationError(String),
}

/// Integrity violations detected while building a `FlowGraph`.
///
/// A definition that produces one of these is never offered for navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphIntegrityError {
    #[error("Node id '{0}' is declared more than once")]
    DuplicateNodeId(String),

    #[error("The flow has no 'start' node")]
    MissingStartNode,

    #[error("The 'start' node must not be an end node")]
    StartNodeIsTerminal,

    #[error(
        "Node '{missing_node_id}' not found, which is required by {edge} of node '{source_node_id}'"
    )]
    DanglingReference {
        source_node_id: String,
        missing_node_id: String,
        edge: EdgeKind,
    },
}

/// The current position of a session does not resolve to a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeResolutionError {
    #[error("Node '{0}' does not exist in this flow")]
    NodeNotFound(String),
}

/// Errors returned by `NavigationEngine` transitions. State is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot advance to '{0}': the node does not exist in this flow")]
    UnknownTarget(String),

    #[error("Node '{0}' is an end node and has no forward transition")]
    TerminalNode(String),

    #[error(transparent)]
    NodeResolution(#[from] NodeResolutionError),
}

/// Errors that can occur while loading a flow from JSON text or from disk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Conversion(#[from] FlowConversionError),

    #[error(transparent)]
    Integrity(#[from] GraphIntegrityError),
}
