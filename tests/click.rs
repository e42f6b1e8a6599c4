//! Tests for pairing clicks into node selections.
use phasegraph::canvas::{ClickDisambiguator, ClickState};

#[test]
fn test_two_clicks_within_threshold_select_once() {
    let mut clicks = ClickDisambiguator::default();

    assert_eq!(clicks.click("lexer-1", 0), None);
    assert_eq!(clicks.click("lexer-1", 250), Some("lexer-1".to_string()));
    assert_eq!(clicks.state(), ClickState::Idle);

    // The pair was consumed; a third click starts over.
    assert_eq!(clicks.click("lexer-1", 400), None);
}

#[test]
fn test_threshold_is_inclusive() {
    let mut clicks = ClickDisambiguator::new(300);
    clicks.click("source-1", 1_000);
    assert_eq!(clicks.click("source-1", 1_300), Some("source-1".to_string()));
}

#[test]
fn test_clicks_too_far_apart_do_not_select() {
    let mut clicks = ClickDisambiguator::default();

    assert_eq!(clicks.click("lexer-1", 0), None);
    assert_eq!(clicks.click("lexer-1", 500), None);
    assert_eq!(
        clicks.state(),
        ClickState::AwaitingSecondClick {
            node_id: "lexer-1".to_string(),
            time: 500
        }
    );
    // The late click became the new first click.
    assert_eq!(clicks.click("lexer-1", 700), Some("lexer-1".to_string()));
}

#[test]
fn test_clicks_on_different_nodes_do_not_select() {
    let mut clicks = ClickDisambiguator::default();

    assert_eq!(clicks.click("source-1", 0), None);
    assert_eq!(clicks.click("lexer-1", 100), None);
    assert_eq!(
        clicks.state(),
        ClickState::AwaitingSecondClick {
            node_id: "lexer-1".to_string(),
            time: 100
        }
    );
}

#[test]
fn test_unanswered_click_lingers_until_overwritten() {
    let mut clicks = ClickDisambiguator::default();
    clicks.click("parser-1", 10);

    assert!(matches!(
        clicks.state(),
        ClickState::AwaitingSecondClick { ref node_id, time: 10 } if node_id == "parser-1"
    ));
    clicks.click("source-1", 90_000);
    assert!(matches!(
        clicks.state(),
        ClickState::AwaitingSecondClick { ref node_id, .. } if node_id == "source-1"
    ));
}

#[test]
fn test_out_of_order_timestamps_never_select() {
    let mut clicks = ClickDisambiguator::default();
    clicks.click("lexer-1", 1_000);
    assert_eq!(clicks.click("lexer-1", 900), None);
}
