use super::{EdgeKind, FlowEdge, FlowGraph};
use crate::error::GraphIntegrityError;
use crate::flow::{FlowDefinition, FlowNode, NodeKind, START_NODE_ID};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::info;

/// Validates a `FlowDefinition` and indexes it into a `FlowGraph`.
///
/// Checks, in this order:
/// - node ids are unique
/// - a `start` node exists and is not an end node
/// - every option target, `next` and variant `next` resolves to a declared node
///
/// The first violation is returned.
pub struct GraphBuilder {
    definition: FlowDefinition,
}

impl GraphBuilder {
    pub fn new(definition: FlowDefinition) -> Self {
        Self { definition }
    }

    pub fn build(self) -> Result<FlowGraph, GraphIntegrityError> {
        let FlowDefinition { metadata, nodes } = self.definition;

        let mut index: AHashMap<String, usize> = AHashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(GraphIntegrityError::DuplicateNodeId(node.id.clone()));
            }
        }

        let start = *index
            .get(START_NODE_ID)
            .ok_or(GraphIntegrityError::MissingStartNode)?;
        if nodes[start].is_end() {
            return Err(GraphIntegrityError::StartNodeIsTerminal);
        }

        let edges: Vec<FlowEdge> = nodes.iter().flat_map(collect_edges).collect();
        if let Some(dangling) = edges.iter().find(|e| !index.contains_key(&e.target)) {
            return Err(GraphIntegrityError::DanglingReference {
                source_node_id: dangling.source.clone(),
                missing_node_id: dangling.target.clone(),
                edge: dangling.kind.clone(),
            });
        }

        info!(
            flow = %metadata.id,
            nodes = nodes.len(),
            edges = edges.len(),
            "flow graph validated"
        );

        Ok(FlowGraph {
            metadata,
            nodes,
            index,
            edges,
            start,
        })
    }
}

/// Lists the outgoing edges of a node. Variant edges are ordered by context tag.
fn collect_edges(node: &FlowNode) -> Vec<FlowEdge> {
    let edge = |target: &str, kind: EdgeKind| FlowEdge {
        source: node.id.clone(),
        target: target.to_string(),
        kind,
    };

    match &node.kind {
        NodeKind::Decision(decision) => decision
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                edge(
                    &option.target,
                    EdgeKind::Option {
                        index,
                        context: option.context.clone(),
                    },
                )
            })
            .collect(),
        NodeKind::Action(action) => action
            .next
            .iter()
            .map(|next| edge(next, EdgeKind::Next))
            .chain(
                action
                    .variants
                    .iter()
                    .sorted_by(|a, b| a.0.cmp(b.0))
                    .filter_map(|(context, variant)| {
                        variant.next.as_ref().map(|next| {
                            edge(
                                next,
                                EdgeKind::VariantNext {
                                    context: context.clone(),
                                },
                            )
                        })
                    }),
            )
            .collect(),
        NodeKind::End(_) => Vec::new(),
    }
}
