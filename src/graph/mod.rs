use crate::document::parse_flow_document;
use crate::error::LoadError;
use crate::flow::{FlowDefinition, FlowMetadata, FlowNode, NodeType};
use ahash::AHashMap;
use std::fmt;

mod builder;

pub use builder::GraphBuilder;

/// How a node refers to one of its successors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// The option at `index` of a decision node.
    Option {
        index: usize,
        context: Option<String>,
    },
    /// The `next` field of an action node.
    Next,
    /// The `next` override of an action node's variant.
    VariantNext { context: String },
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Option { index, .. } => write!(f, "option #{}", index + 1),
            EdgeKind::Next => write!(f, "the 'next' field"),
            EdgeKind::VariantNext { context } => write!(f, "the '{}' variant", context),
        }
    }
}

/// A typed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// A validated, id-indexed flow.
///
/// A `FlowGraph` can only be obtained through [`GraphBuilder`], so every instance
/// has unique node ids, a non-terminal `start` node, and only resolvable edges.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    metadata: FlowMetadata,
    nodes: Vec<FlowNode>,
    index: AHashMap<String, usize>,
    edges: Vec<FlowEdge>,
    start: usize,
}

impl FlowGraph {
    pub fn builder(definition: FlowDefinition) -> GraphBuilder {
        GraphBuilder::new(definition)
    }

    /// Parses, converts and validates a JSON flow document in one go.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let definition = parse_flow_document(json)?;
        Ok(Self::builder(definition).build()?)
    }

    pub fn metadata(&self) -> &FlowMetadata {
        &self.metadata
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    /// Nodes in declared order.
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_type(&self, id: &str) -> Option<NodeType> {
        self.node(id).map(FlowNode::node_type)
    }

    pub fn start(&self) -> &FlowNode {
        &self.nodes[self.start]
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a FlowEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
