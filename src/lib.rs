//! # Tebiki - Guided Workflow Navigation Engine
//!
//! **Tebiki** turns a declarative, branching setup procedure (a "flow") into a
//! step-by-step interactive guide. At every point the user sees a choice, an
//! instructional step with commands and inputs, or a completion screen.
//!
//! The crate is purely in-memory and single-session: it owns no I/O apart from the
//! optional [`catalog`] loader, never executes the commands it displays, and
//! keeps no progress across sessions.
//!
//! ## Core Workflow
//!
//! 1.  **Load a flow**: parse a JSON flow document (or implement [`flow::IntoFlow`] for your own format).
//! 2.  **Validate**: build a [`graph::FlowGraph`]. Dangling references, duplicate ids and a missing `start` node are rejected here, never mid-traversal.
//! 3.  **Navigate**: create a [`navigation::NavigationEngine`] and drive it with `advance`, `retreat`, `toggle_command` and `set_variable`.
//! 4.  **Render**: read [`view::NodeView`] and the checklist from [`checklist::ChecklistProjector`] after every transition.
//!
//! ## Quick Start
//!
//! ```rust
//! use tebiki::prelude::*;
//!
//! let json = r#"{
//!     "id": "vps", "title": "VPS setup", "description": "Provision a server",
//!     "steps": [
//!         { "id": "start", "type": "decision", "title": "Provider", "question": "Where?",
//!           "options": [ { "label": "AWS", "next": "aws_setup", "context": "aws" } ] },
//!         { "id": "aws_setup", "type": "step", "title": "Connect",
//!           "commands": ["ssh {{user}}@{{host}}"], "next": "done",
//!           "inputs": [ { "id": "host", "type": "text", "label": "Host" } ] },
//!         { "id": "done", "type": "end", "title": "Done" }
//!     ]
//! }"#;
//!
//! let graph = FlowGraph::from_json(json)?;
//! let mut engine = NavigationEngine::new(graph);
//!
//! engine.advance("aws_setup", Some("aws"))?;
//! engine.set_variable("host", "10.0.0.1");
//!
//! let view = engine.view()?;
//! if let ViewContent::Action { commands, .. } = &view.content {
//!     assert_eq!(commands[0].text, "ssh {{user}}@10.0.0.1");
//! }
//!
//! let checklist = engine.checklist(&ChecklistProjector::default());
//! assert_eq!(checklist[0].status, StepStatus::Completed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod checklist;
pub mod document;
pub mod error;
pub mod flow;
pub mod graph;
pub mod navigation;
pub mod prelude;
pub mod resolve;
pub mod view;
