use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for document models that can be converted into a Tebiki `FlowDefinition`.
///
/// This is the extension point that keeps the engine format-agnostic. The bundled
/// JSON format implements it in [`crate::document`]; other formats (YAML exports,
/// generated flows) only need to provide this translation to reuse validation and
/// navigation unchanged.
///
/// # Example
///
/// ```rust
/// use tebiki::error::FlowConversionError;
/// use tebiki::flow::{EndNode, FlowDefinition, FlowMetadata, FlowNode, IntoFlow, NodeKind};
///
/// struct Checklist { items: Vec<String> }
///
/// impl IntoFlow for Checklist {
///     fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
///         if self.items.is_empty() {
///             return Err(FlowConversionError::ValidationError("no items".to_string()));
///         }
///         // A real conversion would map every item; this one only emits a terminal node.
///         Ok(FlowDefinition {
///             metadata: FlowMetadata { id: "list".to_string(), ..Default::default() },
///             nodes: vec![FlowNode {
///                 id: "done".to_string(),
///                 title: "Done".to_string(),
///                 kind: NodeKind::End(EndNode::default()),
///             }],
///         })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a canonical flow definition.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
