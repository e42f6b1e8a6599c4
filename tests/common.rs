//! Common test utilities for building pipelines and project documents.
use phasegraph::prelude::*;

/// Places one node per phase in `phases`, in order.
#[allow(dead_code)]
pub fn create_state_with(phases: &[PhaseType]) -> PipelineState {
    let layout = LayoutAllocator::default();
    let mut state = PipelineState::new();
    for phase in phases {
        state.add_node(*phase, &layout).expect("Failed to add node");
    }
    state
}

/// Source and lexer nodes joined by a `source-1 -> lexer-1` connection.
#[allow(dead_code)]
pub fn create_connected_source_lexer() -> PipelineState {
    let mut state = create_state_with(&[PhaseType::Source, PhaseType::Lexer]);
    state
        .add_connection("source-1", "lexer-1", Anchors::new("a1", "a2"))
        .expect("Failed to connect source to lexer");
    state
}

/// The full main line, every adjacent pair connected.
#[allow(dead_code)]
pub fn create_full_pipeline() -> PipelineState {
    let mut state = create_state_with(&PhaseType::ORDER);
    for pair in PhaseType::ORDER.windows(2) {
        let source = format!("{}-1", pair[0]);
        let target = format!("{}-1", pair[1]);
        state
            .add_connection(&source, &target, Anchors::default())
            .expect("Failed to connect pipeline");
    }
    state
}

/// Builds a raw connect event the way the drawing surface reports it.
#[allow(dead_code)]
pub fn connect_event(source: &str, target: &str) -> CanvasEvent {
    CanvasEvent::Connect {
        source_raw: format!("N-{}", source),
        target_raw: format!("N-{}", target),
        source_anchor: "a1".to_string(),
        target_anchor: "a2".to_string(),
    }
}

#[allow(dead_code)]
pub fn disconnect_event(source: &str, target: &str) -> CanvasEvent {
    CanvasEvent::Disconnect {
        source_raw: format!("N-{}", source),
        target_raw: format!("N-{}", target),
    }
}

#[allow(dead_code)]
pub fn click_event(node_id: &str, time: u64) -> CanvasEvent {
    CanvasEvent::Click {
        node_id: node_id.to_string(),
        time,
    }
}

/// A saved project from before completion was recorded explicitly: the
/// source was submitted and lexed, nothing further.
#[allow(dead_code)]
pub const LEGACY_PROJECT_JSON: &str = r#"{
  "id": "demo",
  "name": "Demo project",
  "pipeline": {
    "nodes": [
      {"id": "source-1", "type": "source", "label": "Source Code", "position": {"x": 0, "y": 0}},
      {"id": "lexer-1", "type": "lexer", "label": "Lexer", "position": {"x": 250.5, "y": 40}},
      {"id": "parser-1", "type": "parser", "position": {"x": 500, "y": 40}}
    ],
    "connections": [
      {"id": "source-1lexer-1", "sourceNodeId": "source-1", "targetNodeId": "lexer-1",
       "sourceType": "source", "targetType": "lexer", "sourceAnchor": "a1", "targetAnchor": "a2"}
    ],
    "lastSaved": "2024-01-01T00:00:00Z"
  },
  "sourceCode": "x = 1 + 2",
  "tokens": [{"type": "IDENT", "value": "x"}],
  "parseTree": null
}"#;

/// Four nodes whose ids concatenate ambiguously: `x`+`yz` and `xy`+`z` both
/// give `xyz`.
#[allow(dead_code)]
pub fn create_ambiguous_ids() -> PipelineState {
    let json = r#"{"nodes": [
        {"id": "x", "type": "source"},
        {"id": "yz", "type": "lexer"},
        {"id": "xy", "type": "parser"},
        {"id": "z", "type": "analyser"}
    ], "connections": []}"#;
    let (state, _) = deserialize(json).expect("Failed to load ambiguous ids");
    state
}
