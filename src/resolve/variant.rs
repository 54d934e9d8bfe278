use crate::flow::{ActionNode, InputSpec};
use tracing::debug;

/// The content of an action node after context-specific overrides are applied.
///
/// Borrowed from the node (or its variant); nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveAction<'a> {
    pub description: Option<&'a str>,
    pub commands: Option<&'a [String]>,
    pub inputs: Option<&'a [InputSpec]>,
    pub next: Option<&'a str>,
}

/// Resolves the effective content of an action node for the active context.
pub struct ContextVariantResolver;

impl ContextVariantResolver {
    /// Applies the variant matching `selected_context`, field by field.
    ///
    /// Each of `description`, `commands`, `inputs` and `next` is taken from the
    /// variant when it defines it, and from the base node otherwise. Without a
    /// context, or when no variant matches it, the base fields are returned as-is.
    pub fn resolve<'a>(node: &'a ActionNode, selected_context: Option<&str>) -> EffectiveAction<'a> {
        let base = EffectiveAction {
            description: node.description.as_deref(),
            commands: node.commands.as_deref(),
            inputs: node.inputs.as_deref(),
            next: node.next.as_deref(),
        };

        let Some(variant) = selected_context.and_then(|ctx| node.variants.get(ctx)) else {
            return base;
        };
        debug!(context = ?selected_context, "applying action variant");

        EffectiveAction {
            description: variant.description.as_deref().or(base.description),
            commands: variant.commands.as_deref().or(base.commands),
            inputs: variant.inputs.as_deref().or(base.inputs),
            next: variant.next.as_deref().or(base.next),
        }
    }
}
