use super::state::{CommandKey, NavigationState, PROVIDER_VARIABLE};
use crate::checklist::{ChecklistEntry, ChecklistProjector};
use crate::error::{NavigationError, NodeResolutionError};
use crate::flow::{FlowNode, NodeKind, NodeType};
use crate::graph::FlowGraph;
use crate::resolve::{ContextVariantResolver, EffectiveAction};
use crate::view::NodeView;
use tracing::{debug, info, warn};

/// Label of the forward transition offered by an action node.
pub const CONTINUE_LABEL: &str = "Continue";

/// A forward move the view may offer from the current node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub label: String,
    pub target: String,
    pub context: Option<String>,
}

/// Position of the current node among the decision and action nodes of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition {
    /// 1-based.
    pub number: usize,
    pub total: usize,
}

/// The state machine of one workflow session.
///
/// The engine owns the validated graph and the session's [`NavigationState`].
/// `advance`, `retreat`, `toggle_command` and `set_variable` are the only
/// mutations; everything else is a read-only projection. Each call runs to
/// completion, so an observer always sees a fully applied transition.
///
/// Loading a different flow means constructing a new engine; nothing carries over.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    graph: FlowGraph,
    state: NavigationState,
}

impl NavigationEngine {
    /// Starts a session at the `start` node with empty history, sets and variables.
    pub fn new(graph: FlowGraph) -> Self {
        info!(flow = %graph.id(), "navigation session started");
        Self {
            graph,
            state: NavigationState::default(),
        }
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Consumes the session, handing back the graph for reuse.
    pub fn into_graph(self) -> FlowGraph {
        self.graph
    }

    pub fn current_node(&self) -> Result<&FlowNode, NodeResolutionError> {
        self.graph
            .node(&self.state.current_node_id)
            .ok_or_else(|| NodeResolutionError::NodeNotFound(self.state.current_node_id.clone()))
    }

    pub fn current_type(&self) -> Result<NodeType, NodeResolutionError> {
        self.current_node().map(FlowNode::node_type)
    }

    /// Moves forward to `target`.
    ///
    /// Marks the node being left as completed when it is a decision or action.
    /// A given `context` becomes the selected context and is copied into the
    /// reserved `provider` variable.
    pub fn advance(&mut self, target: &str, context: Option<&str>) -> Result<(), NavigationError> {
        if !self.graph.contains(target) {
            warn!(node = target, "refusing to advance to an unknown node");
            return Err(NavigationError::UnknownTarget(target.to_string()));
        }
        match self.graph.node_type(&self.state.current_node_id) {
            Some(NodeType::End) => {
                warn!(node = %self.state.current_node_id, "refusing to advance from an end node");
                return Err(NavigationError::TerminalNode(
                    self.state.current_node_id.clone(),
                ));
            }
            Some(NodeType::Decision | NodeType::Action) => {
                self.state
                    .completed_node_ids
                    .insert(self.state.current_node_id.clone());
            }
            None => {}
        }

        if let Some(ctx) = context {
            self.state.selected_context = Some(ctx.to_string());
            self.state
                .variables
                .insert(PROVIDER_VARIABLE.to_string(), ctx.to_string());
        }

        let previous = std::mem::replace(&mut self.state.current_node_id, target.to_string());
        debug!(from = %previous, to = target, context = ?context, "advanced");
        self.state.history.push(previous);
        Ok(())
    }

    /// Steps back to the previous node. Returns `false`, changing nothing, when the history is empty.
    ///
    /// The node being left loses its completed mark.
    pub fn retreat(&mut self) -> bool {
        let Some(previous) = self.state.history.pop() else {
            return false;
        };
        self.state
            .completed_node_ids
            .remove(&self.state.current_node_id);
        let left = std::mem::replace(&mut self.state.current_node_id, previous);
        debug!(from = %left, to = %self.state.current_node_id, "retreated");
        true
    }

    /// Flips the checked mark of one command. Returns whether it is now checked.
    pub fn toggle_command(&mut self, node_id: &str, command_index: usize) -> bool {
        let key = CommandKey::new(node_id, command_index);
        let checked = if self.state.completed_command_keys.remove(&key) {
            false
        } else {
            self.state.completed_command_keys.insert(key);
            true
        };
        debug!(node = node_id, command = command_index, checked, "toggled command");
        checked
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.state.variables.insert(name.into(), value.into());
    }

    /// The variant-resolved content of the current node, if it is an action.
    pub fn effective_action(&self) -> Result<Option<EffectiveAction<'_>>, NodeResolutionError> {
        Ok(self
            .current_node()?
            .as_action()
            .map(|action| ContextVariantResolver::resolve(action, self.state.selected_context())))
    }

    /// Forward moves available from the current node.
    ///
    /// A decision offers one transition per option, an action offers its effective
    /// `next` (if any), and an end node offers none.
    pub fn transitions(&self) -> Result<Vec<Transition>, NodeResolutionError> {
        let node = self.current_node()?;
        let transitions = match &node.kind {
            NodeKind::Decision(decision) => decision
                .options
                .iter()
                .map(|option| Transition {
                    label: option.label.clone(),
                    target: option.target.clone(),
                    context: option.context.clone(),
                })
                .collect(),
            NodeKind::Action(action) => {
                ContextVariantResolver::resolve(action, self.state.selected_context())
                    .next
                    .map(|next| Transition {
                        label: CONTINUE_LABEL.to_string(),
                        target: next.to_string(),
                        context: None,
                    })
                    .into_iter()
                    .collect()
            }
            NodeKind::End(_) => Vec::new(),
        };
        Ok(transitions)
    }

    /// "Step N of M" among decision and action nodes in declared order. `None` on end nodes.
    pub fn step_position(&self) -> Option<StepPosition> {
        let mut steps = self.graph.nodes().iter().filter(|n| !n.is_end());
        let total = steps.clone().count();
        steps
            .position(|n| n.id == self.state.current_node_id)
            .map(|i| StepPosition {
                number: i + 1,
                total,
            })
    }

    /// The checklist for the current state, using `projector`'s namespace rules.
    pub fn checklist(&self, projector: &ChecklistProjector) -> Vec<ChecklistEntry> {
        projector.project(&self.graph, &self.state)
    }

    /// The render-ready projection of the current node.
    pub fn view(&self) -> Result<NodeView, NodeResolutionError> {
        NodeView::build(self)
    }
}
