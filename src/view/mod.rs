//! Read-only projections of a session for the view layer.
use crate::error::NodeResolutionError;
use crate::flow::{InputIssue, InputSpec, NodeKind};
use crate::navigation::{NavigationEngine, StepPosition, Transition};
use crate::resolve::{ContextVariantResolver, VariableSubstitution};

mod formatter;

pub use formatter::ViewFormatter;

/// Everything needed to draw the current node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeView {
    pub node_id: String,
    pub title: String,
    pub can_retreat: bool,
    pub step: Option<StepPosition>,
    pub content: ViewContent,
    /// Forward moves the view may offer, in display order.
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Decision {
        question: String,
    },
    Action {
        description: Option<String>,
        commands: Vec<CommandView>,
        inputs: Vec<InputView>,
    },
    End {
        description: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandView {
    pub index: usize,
    /// The command with placeholders substituted.
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub spec: InputSpec,
    /// Current value from the variable store, named after the input id.
    pub value: Option<String>,
    pub issues: Vec<InputIssue>,
}

impl NodeView {
    /// Projects the current node of `engine`, applying variants and substitution.
    pub fn build(engine: &NavigationEngine) -> Result<Self, NodeResolutionError> {
        let node = engine.current_node()?;
        let state = engine.state();
        let variables = state.variables();

        let content = match &node.kind {
            NodeKind::Decision(decision) => ViewContent::Decision {
                question: decision.question.clone(),
            },
            NodeKind::Action(action) => {
                let effective = ContextVariantResolver::resolve(action, state.selected_context());
                let commands = effective
                    .commands
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .map(|(index, command)| CommandView {
                        index,
                        text: VariableSubstitution::substitute(command, variables),
                        completed: state.is_command_completed(&node.id, index),
                    })
                    .collect();
                let inputs = effective
                    .inputs
                    .unwrap_or_default()
                    .iter()
                    .map(|spec| {
                        let value = state.variable(&spec.id).map(str::to_string);
                        InputView {
                            issues: spec.check(value.as_deref()),
                            spec: spec.clone(),
                            value,
                        }
                    })
                    .collect();
                ViewContent::Action {
                    description: effective
                        .description
                        .map(|d| VariableSubstitution::substitute(d, variables)),
                    commands,
                    inputs,
                }
            }
            NodeKind::End(end) => ViewContent::End {
                description: end
                    .description
                    .as_deref()
                    .map(|d| VariableSubstitution::substitute(d, variables)),
            },
        };

        Ok(Self {
            node_id: node.id.clone(),
            title: node.title.clone(),
            can_retreat: state.can_retreat(),
            step: engine.step_position(),
            content,
            transitions: engine.transitions()?,
        })
    }
}
