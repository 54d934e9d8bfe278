//! Integration tests for Tebiki
//!
//! End-to-end sessions over the bundled sample flow.
mod common;
use common::*;
use tebiki::prelude::*;

fn choose(engine: &mut NavigationEngine, label: &str) {
    let transition = engine
        .transitions()
        .unwrap()
        .into_iter()
        .find(|t| t.label == label)
        .unwrap_or_else(|| panic!("no transition labelled '{}'", label));
    engine
        .advance(&transition.target, transition.context.as_deref())
        .unwrap();
}

#[test]
fn test_full_session_through_the_sample_flow() {
    let graph = FlowGraph::from_json(VPS_SETUP_JSON).expect("sample flow is valid");
    let projector = ChecklistProjector::default();
    let mut engine = NavigationEngine::new(graph);

    choose(&mut engine, "Oracle Cloud");
    engine.set_variable("compartment", "ocid1.compartment.oc1..aaaa");
    choose(&mut engine, "Continue");
    engine.set_variable("host", "140.238.1.2");
    choose(&mut engine, "Continue");
    for index in 0..3 {
        engine.toggle_command("harden", index);
    }
    choose(&mut engine, "Continue");

    assert_eq!(engine.current_type(), Ok(NodeType::End));
    assert_eq!(
        engine.state().history(),
        ["start", "oracle_launch", "connect", "harden"]
    );

    let checklist = engine.checklist(&projector);
    let summary: Vec<_> = checklist
        .iter()
        .map(|e| (e.node_id.as_str(), e.status))
        .collect();
    assert_eq!(
        summary,
        [
            ("start", StepStatus::Completed),
            ("oracle_launch", StepStatus::Completed),
            ("connect", StepStatus::Completed),
            ("harden", StepStatus::Completed),
            ("done", StepStatus::Current),
        ]
    );
}

#[test]
fn test_changing_provider_midway_through() {
    let graph = FlowGraph::from_json(VPS_SETUP_JSON).unwrap();
    let projector = ChecklistProjector::default();
    let mut engine = NavigationEngine::new(graph);

    choose(&mut engine, "AWS");
    choose(&mut engine, "Continue");
    assert_eq!(engine.state().current_node_id(), "connect");

    // Back out to the provider choice and pick another branch.
    assert!(engine.retreat());
    assert!(engine.retreat());
    assert_eq!(engine.state().current_node_id(), "start");
    assert!(!engine.state().is_completed("aws_launch"));
    choose(&mut engine, "Hetzner");
    choose(&mut engine, "Continue");

    assert_eq!(engine.state().selected_context(), Some("hetzner"));
    assert_eq!(engine.state().variable("provider"), Some("hetzner"));

    let ids: Vec<_> = engine
        .checklist(&projector)
        .into_iter()
        .map(|e| e.node_id)
        .collect();
    assert_eq!(ids, ["start", "hetzner_launch", "connect", "harden", "done"]);

    let view = engine.view().unwrap();
    match view.content {
        ViewContent::Action { commands, .. } => {
            assert_eq!(commands[0].text, "ssh {{user}}@{{host}}")
        }
        other => panic!("expected an action view, got {:?}", other),
    }
}

#[test]
fn test_new_session_for_another_flow_starts_fresh() {
    let mut engine = NavigationEngine::new(FlowGraph::from_json(VPS_SETUP_JSON).unwrap());
    choose(&mut engine, "AWS");
    engine.set_variable("ami", "ami-0123456789abcdef0");

    let engine = NavigationEngine::new(provider_graph());
    assert_eq!(engine.state(), &NavigationState::default());
    assert_eq!(engine.graph().id(), "provider-flow");
}

#[test]
fn test_graph_can_be_reused_after_a_session() {
    let mut engine = NavigationEngine::new(provider_graph());
    choose(&mut engine, "AWS");
    let graph = engine.into_graph();

    let engine = NavigationEngine::new(graph);
    assert_eq!(engine.state().current_node_id(), "start");
    assert!(engine.state().completed_node_ids().is_empty());
}
