//! Tests for the checklist projection.
mod common;
use common::*;
use tebiki::checklist::ProviderNamespace;
use tebiki::prelude::*;

fn namespaced_engine() -> NavigationEngine {
    let def = definition(vec![
        decision(
            "start",
            &[
                ("AWS", "aws_configure", Some("aws")),
                ("Oracle", "oracle_configure", Some("oracle")),
            ],
        ),
        action("aws_configure", Some("shared")),
        action("oracle_configure", Some("shared")),
        action("shared", Some("done")),
        end("done"),
    ]);
    NavigationEngine::new(FlowGraph::builder(def).build().expect("valid flow"))
}

fn ids(entries: &[ChecklistEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.node_id.as_str()).collect()
}

#[test]
fn test_provider_steps_hidden_without_context() {
    let engine = namespaced_engine();
    let entries = engine.checklist(&ChecklistProjector::default());

    assert_eq!(ids(&entries), ["start", "shared", "done"]);
    assert_eq!(entries[0].status, StepStatus::Current);
    assert_eq!(entries[1].status, StepStatus::Pending);
}

#[test]
fn test_provider_steps_follow_the_selected_context() {
    let projector = ChecklistProjector::default();

    let mut engine = namespaced_engine();
    engine.advance("oracle_configure", Some("oracle")).unwrap();
    let entries = engine.checklist(&projector);
    assert!(!ids(&entries).contains(&"aws_configure"));
    assert_eq!(ids(&entries), ["start", "oracle_configure", "shared", "done"]);

    let mut engine = namespaced_engine();
    engine.advance("aws_configure", Some("aws")).unwrap();
    let entries = engine.checklist(&projector);
    assert_eq!(ids(&entries), ["start", "aws_configure", "shared", "done"]);
}

#[test]
fn test_statuses_reflect_completion_and_position() {
    let mut engine = namespaced_engine();
    engine.advance("aws_configure", Some("aws")).unwrap();
    engine.advance("shared", None).unwrap();

    let entries = engine.checklist(&ChecklistProjector::default());
    let statuses: Vec<_> = entries.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        [
            StepStatus::Completed,
            StepStatus::Completed,
            StepStatus::Current,
            StepStatus::Pending
        ]
    );
    assert_eq!(entries[2].title, "shared");
}

#[test]
fn test_checklist_keeps_declared_order_not_visit_order() {
    let def = definition(vec![
        decision("start", &[("Skip", "late", None)]),
        action("early", Some("done")),
        action("late", Some("early")),
        end("done"),
    ]);
    let mut engine = NavigationEngine::new(FlowGraph::builder(def).build().unwrap());
    engine.advance("late", None).unwrap();
    engine.advance("early", None).unwrap();

    let entries = engine.checklist(&ChecklistProjector::default());
    assert_eq!(ids(&entries), ["start", "early", "late", "done"]);
    assert_eq!(entries[1].status, StepStatus::Current);
    assert_eq!(entries[2].status, StepStatus::Completed);
}

#[test]
fn test_completed_wins_over_current() {
    let def = definition(vec![
        decision("start", &[("Loop", "work", None)]),
        action("work", Some("start")),
    ]);
    let mut engine = NavigationEngine::new(FlowGraph::builder(def).build().unwrap());
    engine.advance("work", None).unwrap();
    engine.advance("start", None).unwrap();

    let entries = engine.checklist(&ChecklistProjector::default());
    assert_eq!(entries[0].node_id, "start");
    assert_eq!(entries[0].status, StepStatus::Completed);
}

#[test]
fn test_decision_and_end_nodes_ignore_namespaces() {
    let def = definition(vec![
        decision("start", &[("Go", "aws_pick", None)]),
        decision("aws_pick", &[("Done", "aws_done", None)]),
        end("aws_done"),
    ]);
    let engine = NavigationEngine::new(FlowGraph::builder(def).build().unwrap());
    let entries = engine.checklist(&ChecklistProjector::default());
    assert_eq!(ids(&entries), ["start", "aws_pick", "aws_done"]);
}

#[test]
fn test_custom_namespaces() {
    let def = definition(vec![
        decision("start", &[("GCP", "gcp_setup", Some("gcp"))]),
        action("gcp_setup", Some("aws_setup")),
        action("aws_setup", Some("done")),
        end("done"),
    ]);
    let engine = NavigationEngine::new(FlowGraph::builder(def).build().unwrap());

    let gcp_only = ChecklistProjector::builder()
        .without_default_namespaces()
        .with_namespace("gcp_", "gcp")
        .build();
    assert_eq!(
        gcp_only.namespaces(),
        [ProviderNamespace::new("gcp_", "gcp")]
    );
    assert_eq!(
        ids(&engine.checklist(&gcp_only)),
        ["start", "aws_setup", "done"]
    );

    let defaults_plus_gcp = ChecklistProjector::builder()
        .with_namespace("gcp_", "gcp")
        .build();
    assert_eq!(defaults_plus_gcp.namespaces().len(), 4);
    assert_eq!(ids(&engine.checklist(&defaults_plus_gcp)), ["start", "done"]);
}

#[test]
fn test_projector_is_usable_without_an_engine() {
    let graph = provider_graph();
    let state = NavigationState::default();
    let entries = ChecklistProjector::default().project(&graph, &state);
    assert_eq!(ids(&entries), ["start", "configure", "done"]);
}
