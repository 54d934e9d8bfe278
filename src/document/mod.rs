//! The JSON flow file format.
//!
//! These structs mirror the on-disk document one to one and are only used to
//! deserialize it and convert it into the canonical [`FlowDefinition`].

use crate::error::{FlowConversionError, LoadError};
use crate::flow::{
    ActionNode, ActionVariant, DecisionNode, DecisionOption, EndNode, FlowDefinition,
    FlowMetadata, FlowNode, InputKind, InputSpec, IntoFlow, NodeKind, ValidationPattern,
};
use ahash::AHashMap;
use serde::Deserialize;

/// A complete flow file: metadata fields flattened next to the `steps` array.
#[derive(Debug, Deserialize, Clone)]
pub struct FlowDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub steps: Vec<DocumentStep>,
}

/// One entry of `steps`, discriminated by its `type` field.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentStep {
    Decision {
        id: String,
        title: String,
        question: String,
        #[serde(default)]
        options: Vec<DocumentOption>,
    },
    Step {
        id: String,
        title: String,
        description: Option<String>,
        commands: Option<Vec<String>>,
        next: Option<String>,
        inputs: Option<Vec<DocumentInput>>,
        #[serde(default)]
        variants: AHashMap<String, DocumentVariant>,
    },
    End {
        id: String,
        title: String,
        description: Option<String>,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentOption {
    pub label: String,
    pub next: String,
    pub context: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DocumentVariant {
    pub description: Option<String>,
    pub commands: Option<Vec<String>>,
    pub next: Option<String>,
    pub inputs: Option<Vec<DocumentInput>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentInput {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: DocumentInputKind,
    pub label: String,
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub default: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    pub validation: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentInputKind {
    #[default]
    Text,
    Select,
    Number,
    Email,
}

/// Parses a JSON flow document and converts it into a `FlowDefinition`.
///
/// The result is not yet integrity-checked; pass it to [`crate::graph::FlowGraph::builder`].
pub fn parse_flow_document(json: &str) -> Result<FlowDefinition, LoadError> {
    let document: FlowDocument =
        serde_json::from_str(json).map_err(|e| LoadError::JsonParseError(e.to_string()))?;
    Ok(document.into_flow()?)
}

impl IntoFlow for FlowDocument {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let metadata = FlowMetadata {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            version: self.version,
            author: self.author,
            tags: self.tags,
        };
        if metadata.id.trim().is_empty() {
            return Err(FlowConversionError::ValidationError(
                "flow id must not be empty".to_string(),
            ));
        }

        let nodes = self
            .steps
            .into_iter()
            .map(convert_step)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FlowDefinition { metadata, nodes })
    }
}

fn convert_step(step: DocumentStep) -> Result<FlowNode, FlowConversionError> {
    let (id, title, kind) = match step {
        DocumentStep::Decision {
            id,
            title,
            question,
            options,
        } => {
            if options.is_empty() {
                return Err(FlowConversionError::ValidationError(format!(
                    "decision '{}' has no options",
                    id
                )));
            }
            let options = options
                .into_iter()
                .map(|o| DecisionOption {
                    label: o.label,
                    target: o.next,
                    context: o.context,
                })
                .collect();
            (id, title, NodeKind::Decision(DecisionNode { question, options }))
        }
        DocumentStep::Step {
            id,
            title,
            description,
            commands,
            next,
            inputs,
            variants,
        } => {
            let inputs = inputs.map(|i| convert_inputs(&id, i)).transpose()?;
            let variants = variants
                .into_iter()
                .map(|(context, v)| -> Result<_, FlowConversionError> {
                    let inputs = v.inputs.map(|i| convert_inputs(&id, i)).transpose()?;
                    Ok((
                        context,
                        ActionVariant {
                            description: v.description,
                            commands: v.commands,
                            inputs,
                            next: v.next,
                        },
                    ))
                })
                .collect::<Result<AHashMap<String, ActionVariant>, _>>()?;
            let action = ActionNode {
                description,
                commands,
                inputs,
                next,
                variants,
            };
            (id, title, NodeKind::Action(action))
        }
        DocumentStep::End {
            id,
            title,
            description,
        } => (id, title, NodeKind::End(EndNode { description })),
    };

    if id.trim().is_empty() {
        return Err(FlowConversionError::ValidationError(format!(
            "node '{}' has an empty id",
            title
        )));
    }
    Ok(FlowNode { id, title, kind })
}

fn convert_inputs(
    node_id: &str,
    inputs: Vec<DocumentInput>,
) -> Result<Vec<InputSpec>, FlowConversionError> {
    inputs
        .into_iter()
        .map(|input| {
            let kind = match input.kind {
                DocumentInputKind::Text => InputKind::Text,
                DocumentInputKind::Select => InputKind::Select,
                DocumentInputKind::Number => InputKind::Number,
                DocumentInputKind::Email => InputKind::Email,
            };
            if kind == InputKind::Select && input.options.is_empty() {
                return Err(FlowConversionError::ValidationError(format!(
                    "select input '{}' of node '{}' has no options",
                    input.id, node_id
                )));
            }
            Ok(InputSpec {
                id: input.id,
                kind,
                label: input.label,
                placeholder: input.placeholder,
                required: input.required,
                default: input.default,
                options: input.options,
                validation: input.validation.map(ValidationPattern::new),
            })
        })
        .collect()
}
