use super::input::InputSpec;
use ahash::AHashMap;

/// Id of the node every session starts on.
pub const START_NODE_ID: &str = "start";

/// Descriptive information about a flow, shown by catalogs and headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// The complete, canonical definition of a guided flow, ready for validation.
/// This is the target structure for any document conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowDefinition {
    pub metadata: FlowMetadata,
    /// Nodes in declared order. The order drives checklist projection.
    pub nodes: Vec<FlowNode>,
}

/// The three UI modes a node can put a session in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Decision,
    Action,
    End,
}

/// A single node of a flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub title: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Decision(DecisionNode),
    Action(ActionNode),
    End(EndNode),
}

/// A branch point with mutually exclusive, labeled options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionNode {
    pub question: String,
    pub options: Vec<DecisionOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOption {
    pub label: String,
    pub target: String,
    /// Context tag activated when this option is chosen.
    pub context: Option<String>,
}

/// One task, optionally carrying commands and form inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionNode {
    pub description: Option<String>,
    pub commands: Option<Vec<String>>,
    pub inputs: Option<Vec<InputSpec>>,
    pub next: Option<String>,
    /// Context tag -> per-field override.
    pub variants: AHashMap<String, ActionVariant>,
}

/// A per-context override of an `ActionNode`. Every field falls back to the base node independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionVariant {
    pub description: Option<String>,
    pub commands: Option<Vec<String>>,
    pub inputs: Option<Vec<InputSpec>>,
    pub next: Option<String>,
}

/// A terminal node. No forward transition leaves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndNode {
    pub description: Option<String>,
}

impl FlowNode {
    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Decision(_) => NodeType::Decision,
            NodeKind::Action(_) => NodeType::Action,
            NodeKind::End(_) => NodeType::End,
        }
    }

    pub fn as_decision(&self) -> Option<&DecisionNode> {
        match &self.kind {
            NodeKind::Decision(decision) => Some(decision),
            _ => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionNode> {
        match &self.kind {
            NodeKind::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, NodeKind::End(_))
    }
}
