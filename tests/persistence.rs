//! Tests for converting pipelines to and from the project store's JSON.
mod common;
use common::*;
use phasegraph::persistence::{self, FileProjectStore, from_document, to_document};
use phasegraph::prelude::*;
use serde_json::json;

#[test]
fn test_serialize_matches_store_shape() {
    let state = create_connected_source_lexer();
    let json = serialize(&state, &PhaseCompletionStatus::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["nodes"][0],
        json!({"id": "source-1", "type": "source", "label": "Source Code",
               "position": {"x": 100.0, "y": 150.0}})
    );
    assert_eq!(
        value["connections"][0],
        json!({"id": "source-1lexer-1", "sourceNodeId": "source-1", "targetNodeId": "lexer-1",
               "sourceType": "source", "targetType": "lexer",
               "sourceAnchor": "a1", "targetAnchor": "a2"})
    );
    assert_eq!(value["lastSaved"], serde_json::Value::Null);
    assert_eq!(value["completionStatus"]["source"], json!(false));
}

#[test]
fn test_round_trip_restores_state_and_status() {
    let mut state = create_full_pipeline();
    state.move_node("parser-1", Position::new(-12.75, 333.125));
    state.remove_node("analyser-1");
    state.mark_saved("2024-01-01T00:00:00Z".parse().unwrap());

    let mut status = PhaseCompletionStatus::default();
    status.set(PhaseType::Source, true);
    status.set(PhaseType::Lexer, true);

    let json = serialize(&state, &status).unwrap();
    let (restored_state, restored_status) = deserialize(&json).unwrap();

    assert_eq!(restored_state, state);
    assert_eq!(restored_status, status);
    assert_eq!(serialize(&restored_state, &restored_status).unwrap(), json);
}

#[test]
fn test_round_trip_keeps_dragged_positions_exact() {
    let mut state = create_connected_source_lexer();
    let status = PhaseCompletionStatus::default();

    for n in 0..2_000u32 {
        let x = f64::from(n) / 997.0 - 1000.0;
        state.move_node("source-1", Position::new(x, 0.3 * x));
        state.move_node("lexer-1", Position::new(x / 3.0, 1665.3981945837513));

        let (restored, _) = deserialize(&serialize(&state, &status).unwrap()).unwrap();
        assert_eq!(restored.nodes(), state.nodes(), "position drifted at x = {}", x);
    }
}

#[test]
fn test_repeated_pair_in_document_is_loaded_once() {
    let json = r#"{"nodes": [{"id": "source-1", "type": "source"},
                             {"id": "lexer-1", "type": "lexer"}],
                   "connections": [
                     {"id": "legacy-edge", "sourceNodeId": "source-1", "targetNodeId": "lexer-1"},
                     {"id": "source-1lexer-1", "sourceNodeId": "source-1", "targetNodeId": "lexer-1"}
                   ]}"#;
    let (state, _) = deserialize(json).unwrap();
    assert_eq!(state.connections().len(), 1);
    assert_eq!(state.connections()[0].id, "legacy-edge");
}

#[test]
fn test_connection_id_shared_by_two_pairs_is_rejected() {
    let json = r#"{"nodes": [{"id": "x", "type": "source"}, {"id": "yz", "type": "lexer"},
                             {"id": "xy", "type": "parser"}, {"id": "z", "type": "analyser"}],
                   "connections": [
                     {"id": "xyz", "sourceNodeId": "x", "targetNodeId": "yz"},
                     {"id": "xyz", "sourceNodeId": "xy", "targetNodeId": "z"}
                   ]}"#;
    assert_eq!(
        deserialize(json).unwrap_err(),
        PersistenceError::ConnectionIdCollision {
            connection_id: "xyz".to_string()
        }
    );
}

#[test]
fn test_restore_keeps_ids_and_positions_verbatim() {
    let (state, _) = deserialize_project(LEGACY_PROJECT_JSON).unwrap();

    let lexer = state.node("lexer-1").unwrap();
    assert_eq!(lexer.position, Position::new(250.5, 40.0));
    let parser = state.node("parser-1").unwrap();
    assert_eq!(parser.label, "Parser");
    assert_eq!(
        state.last_saved().map(|t| t.to_rfc3339()),
        Some("2024-01-01T00:00:00+00:00".to_string())
    );
    assert_eq!(state.connections()[0].id, "source-1lexer-1");
}

#[test]
fn test_legacy_project_infers_completion_from_artifacts() {
    let (_, status) = deserialize_project(LEGACY_PROJECT_JSON).unwrap();
    assert!(status.source);
    assert!(status.lexer);
    assert!(!status.parser);
    assert!(!status.analyser);
    assert!(!status.translator);
}

#[test]
fn test_explicit_completion_wins_over_artifacts() {
    let mut project: ProjectDocument = serde_json::from_str(LEGACY_PROJECT_JSON).unwrap();
    project.pipeline.completion_status = Some(PhaseCompletionStatus {
        source: true,
        ..PhaseCompletionStatus::default()
    });
    assert!(!project.completion_status().lexer);
    assert!(project.inferred_completion().lexer);
}

#[test]
fn test_empty_artifacts_read_as_not_completed() {
    let project: ProjectDocument = serde_json::from_value(json!({
        "pipeline": {"nodes": [], "connections": [], "lastSaved": null},
        "sourceCode": "   ",
        "tokens": [],
        "parseTree": {},
        "symbolTable": [],
        "translatedCode": ""
    }))
    .unwrap();
    assert_eq!(project.completion_status(), PhaseCompletionStatus::default());
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let json = r#"{"nodes": [{"id": "linker-1", "type": "linker", "position": {"x": 0, "y": 0}}],
                   "connections": [], "lastSaved": null}"#;
    assert_eq!(
        deserialize(json).unwrap_err(),
        PersistenceError::UnknownPhase {
            node_id: "linker-1".to_string(),
            type_name: "linker".to_string()
        }
    );
}

#[test]
fn test_dangling_connection_is_rejected() {
    let json = r#"{"nodes": [{"id": "source-1", "type": "source", "position": {"x": 0, "y": 0}}],
                   "connections": [{"id": "source-1lexer-1", "sourceNodeId": "source-1",
                                    "targetNodeId": "lexer-1"}],
                   "lastSaved": null}"#;
    assert_eq!(
        deserialize(json).unwrap_err(),
        PersistenceError::DanglingConnection {
            connection_id: "source-1lexer-1".to_string(),
            node_id: "lexer-1".to_string()
        }
    );
}

#[test]
fn test_duplicate_type_in_document_is_rejected() {
    let json = r#"{"nodes": [{"id": "source-1", "type": "source"},
                             {"id": "source-2", "type": "source"}],
                   "connections": []}"#;
    assert_eq!(
        deserialize(json).unwrap_err(),
        PersistenceError::DuplicateNode {
            node_id: "source-2".to_string()
        }
    );
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(matches!(
        deserialize("{\"nodes\": ["),
        Err(PersistenceError::Json(_))
    ));
}

#[test]
fn test_document_conversion_recomputes_cached_types() {
    let state = create_connected_source_lexer();
    let mut document = to_document(&state, &PhaseCompletionStatus::default());
    document.connections[0].source_type = None;
    document.connections[0].target_type = None;

    let restored = from_document(&document).unwrap();
    assert_eq!(restored.connections(), state.connections());
}

#[test]
fn test_memory_store_saves_pipeline_only() {
    let mut store = MemoryProjectStore::new();
    let project: ProjectDocument = serde_json::from_str(LEGACY_PROJECT_JSON).unwrap();
    store.insert("demo", project);

    let state = create_state_with(&[PhaseType::Source]);
    let document = to_document(&state, &PhaseCompletionStatus::default());
    store.save_pipeline("demo", &document).unwrap();

    let stored = store.get("demo").unwrap();
    assert_eq!(stored.pipeline, document);
    assert_eq!(stored.source_code.as_deref(), Some("x = 1 + 2"));
    assert!(store.load_project("missing").is_err());
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileProjectStore::new(dir.path().join("projects"));

    let state = create_connected_source_lexer();
    let mut status = PhaseCompletionStatus::default();
    status.set(PhaseType::Source, true);
    store
        .save_pipeline("alpha", &to_document(&state, &status))
        .unwrap();

    let project = store.load_project("alpha").unwrap();
    assert_eq!(project.id.as_deref(), Some("alpha"));
    let (restored, restored_status) = persistence::restore_project(&project).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored_status, status);
}

#[test]
fn test_file_store_rejects_path_like_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileProjectStore::new(dir.path());
    assert!(matches!(
        store.load_project("../etc/passwd"),
        Err(PersistenceError::Transport(_))
    ));
}
