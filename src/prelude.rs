//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the tebiki crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use tebiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = FlowCatalog::from_dir("flows")?;
//! let graph = catalog.get("vps-setup").cloned().ok_or("unknown flow")?;
//!
//! let mut engine = NavigationEngine::new(graph);
//! let first = engine.transitions()?.remove(0);
//! engine.advance(&first.target, first.context.as_deref())?;
//!
//! println!("{}", ViewFormatter::format_view(&engine.view()?));
//! # Ok(())
//! # }
//! ```

// Loading and validation
pub use crate::catalog::FlowCatalog;
pub use crate::document::parse_flow_document;
pub use crate::graph::{EdgeKind, FlowEdge, FlowGraph};

// Canonical model
pub use crate::flow::{
    ActionNode, ActionVariant, DecisionNode, DecisionOption, EndNode, FlowDefinition,
    FlowMetadata, FlowNode, InputIssue, InputKind, InputSpec, IntoFlow, NodeKind, NodeType,
    ValidationPattern,
};

// Session engine and projections
pub use crate::checklist::{ChecklistEntry, ChecklistProjector, StepStatus};
pub use crate::navigation::{NavigationEngine, NavigationState, StepPosition, Transition};
pub use crate::resolve::{ContextVariantResolver, EffectiveAction, VariableSubstitution};
pub use crate::view::{NodeView, ViewContent, ViewFormatter};

// Error types
pub use crate::error::{
    FlowConversionError, GraphIntegrityError, LoadError, NavigationError, NodeResolutionError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
