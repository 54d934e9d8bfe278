//! Common test utilities for building flow definitions.
use ahash::AHashMap;
use tebiki::prelude::*;

/// The bundled sample flow.
#[allow(dead_code)]
pub const VPS_SETUP_JSON: &str = include_str!("../flows/vps-setup.json");

/// Start decision between AWS and Oracle, one provider step each, a shared
/// configure step and an end node.
#[allow(dead_code)]
pub const PROVIDER_FLOW_JSON: &str = r#"{
    "id": "provider-flow",
    "title": "Provider flow",
    "description": "Pick a cloud and configure it",
    "category": "Infrastructure",
    "tags": ["cloud"],
    "steps": [
        { "id": "start", "type": "decision", "title": "Pick a provider", "question": "Which one?",
          "options": [
              { "label": "AWS", "next": "aws_setup", "context": "aws" },
              { "label": "Oracle", "next": "oracle_setup", "context": "oracle" }
          ] },
        { "id": "aws_setup", "type": "step", "title": "Set up AWS",
          "commands": ["aws configure"], "next": "configure" },
        { "id": "oracle_setup", "type": "step", "title": "Set up Oracle",
          "commands": ["oci setup config"], "next": "configure" },
        { "id": "configure", "type": "step", "title": "Configure", "description": "base",
          "commands": ["curl {{host}}:{{port}}"], "next": "done",
          "variants": { "aws": { "commands": ["aws sts get-caller-identity"], "next": "aws_extra" } } },
        { "id": "aws_extra", "type": "step", "title": "AWS extras", "next": "done" },
        { "id": "done", "type": "end", "title": "Done", "description": "All set on {{provider}}" }
    ]
}"#;

#[allow(dead_code)]
pub fn provider_graph() -> FlowGraph {
    FlowGraph::from_json(PROVIDER_FLOW_JSON).expect("provider flow is valid")
}

#[allow(dead_code)]
pub fn decision(id: &str, options: &[(&str, &str, Option<&str>)]) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        title: id.to_string(),
        kind: NodeKind::Decision(DecisionNode {
            question: format!("{}?", id),
            options: options
                .iter()
                .map(|(label, target, context)| DecisionOption {
                    label: label.to_string(),
                    target: target.to_string(),
                    context: context.map(str::to_string),
                })
                .collect(),
        }),
    }
}

#[allow(dead_code)]
pub fn action(id: &str, next: Option<&str>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        title: id.to_string(),
        kind: NodeKind::Action(ActionNode {
            next: next.map(str::to_string),
            ..Default::default()
        }),
    }
}

#[allow(dead_code)]
pub fn action_with_variants(
    id: &str,
    next: Option<&str>,
    variants: Vec<(&str, ActionVariant)>,
) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        title: id.to_string(),
        kind: NodeKind::Action(ActionNode {
            next: next.map(str::to_string),
            variants: variants
                .into_iter()
                .map(|(context, v)| (context.to_string(), v))
                .collect::<AHashMap<_, _>>(),
            ..Default::default()
        }),
    }
}

#[allow(dead_code)]
pub fn end(id: &str) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        title: id.to_string(),
        kind: NodeKind::End(EndNode::default()),
    }
}

#[allow(dead_code)]
pub fn definition(nodes: Vec<FlowNode>) -> FlowDefinition {
    FlowDefinition {
        metadata: FlowMetadata {
            id: "test-flow".to_string(),
            title: "Test flow".to_string(),
            ..Default::default()
        },
        nodes,
    }
}

#[allow(dead_code)]
pub fn variables(pairs: &[(&str, &str)]) -> AHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
