use crate::flow::{FlowNode, NodeType};
use crate::graph::FlowGraph;
use crate::navigation::NavigationState;
use std::fmt;
use tracing::debug;

/// Progress of one checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Completed => write!(f, "completed"),
            StepStatus::Current => write!(f, "current"),
            StepStatus::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub node_id: String,
    pub title: String,
    pub status: StepStatus,
}

/// Ties an action-node id prefix to the context that makes those nodes visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderNamespace {
    pub prefix: String,
    pub context: String,
}

impl ProviderNamespace {
    pub fn new(prefix: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            context: context.into(),
        }
    }
}

const DEFAULT_NAMESPACES: [(&str, &str); 3] = [
    ("oracle_", "oracle"),
    ("aws_", "aws"),
    ("hetzner_", "hetzner"),
];

/// Derives the display checklist from a graph and a session state.
///
/// Decision and end nodes are always listed. An action node whose id starts with a
/// recognised provider prefix is only listed while that provider's context is
/// selected; other action nodes are always listed. Entries keep the declared node
/// order, so the list shows the potential path rather than the visited one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistProjector {
    namespaces: Vec<ProviderNamespace>,
}

impl Default for ChecklistProjector {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ChecklistProjector {
    pub fn builder() -> ChecklistProjectorBuilder {
        ChecklistProjectorBuilder::new()
    }

    pub fn namespaces(&self) -> &[ProviderNamespace] {
        &self.namespaces
    }

    pub fn project(&self, graph: &FlowGraph, state: &NavigationState) -> Vec<ChecklistEntry> {
        let entries: Vec<ChecklistEntry> = graph
            .nodes()
            .iter()
            .filter(|node| self.is_visible(node, state.selected_context()))
            .map(|node| ChecklistEntry {
                node_id: node.id.clone(),
                title: node.title.clone(),
                status: if state.is_completed(&node.id) {
                    StepStatus::Completed
                } else if node.id == state.current_node_id() {
                    StepStatus::Current
                } else {
                    StepStatus::Pending
                },
            })
            .collect();
        debug!(
            entries = entries.len(),
            total = graph.len(),
            context = ?state.selected_context(),
            "projected checklist"
        );
        entries
    }

    fn is_visible(&self, node: &FlowNode, selected_context: Option<&str>) -> bool {
        match node.node_type() {
            NodeType::Decision | NodeType::End => true,
            NodeType::Action => self
                .namespaces
                .iter()
                .filter(|ns| node.id.starts_with(&ns.prefix))
                .all(|ns| selected_context == Some(ns.context.as_str())),
        }
    }
}

pub struct ChecklistProjectorBuilder {
    namespaces: Vec<ProviderNamespace>,
}

impl ChecklistProjectorBuilder {
    /// Starts from the `oracle_`, `aws_` and `hetzner_` namespaces.
    pub fn new() -> Self {
        Self {
            namespaces: DEFAULT_NAMESPACES
                .iter()
                .map(|(prefix, context)| ProviderNamespace::new(*prefix, *context))
                .collect(),
        }
    }

    pub fn without_default_namespaces(mut self) -> Self {
        self.namespaces.clear();
        self
    }

    pub fn with_namespace(mut self, prefix: &str, context: &str) -> Self {
        self.namespaces.retain(|ns| ns.prefix != prefix);
        self.namespaces.push(ProviderNamespace::new(prefix, context));
        self
    }

    pub fn build(self) -> ChecklistProjector {
        ChecklistProjector {
            namespaces: self.namespaces,
        }
    }
}

impl Default for ChecklistProjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
