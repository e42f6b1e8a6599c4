use crate::config::DEFAULT_CLICK_THRESHOLD_MS;
use tracing::debug;

/// Where the disambiguator stands between clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickState {
    Idle,
    /// A first click landed on `node_id` at `time`; a second one may follow.
    AwaitingSecondClick { node_id: String, time: u64 },
}

/// Turns pairs of clicks on the same node into a single "select" action.
///
/// One instance is shared by the whole canvas. There is no timer: the
/// threshold is only checked when the next click arrives, so an unanswered
/// first click lingers until any later click overwrites it.
#[derive(Debug, Clone)]
pub struct ClickDisambiguator {
    threshold_ms: u64,
    last_clicked_node_id: Option<String>,
    last_click_time: Option<u64>,
}

impl Default for ClickDisambiguator {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_THRESHOLD_MS)
    }
}

impl ClickDisambiguator {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            last_clicked_node_id: None,
            last_click_time: None,
        }
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    pub fn state(&self) -> ClickState {
        match (&self.last_clicked_node_id, self.last_click_time) {
            (Some(node_id), Some(time)) => ClickState::AwaitingSecondClick {
                node_id: node_id.clone(),
                time,
            },
            _ => ClickState::Idle,
        }
    }

    /// Feeds one click at `time` (milliseconds). Returns the node to select
    /// when this click completes a pair.
    ///
    /// A click stamped earlier than the pending one never completes a pair.
    pub fn click(&mut self, node_id: &str, time: u64) -> Option<String> {
        let completes_pair = self.last_clicked_node_id.as_deref() == Some(node_id)
            && self
                .last_click_time
                .and_then(|last| time.checked_sub(last))
                .is_some_and(|elapsed| elapsed <= self.threshold_ms);

        if completes_pair {
            debug!(node_id, time, "second click within threshold, selecting");
            self.clear();
            Some(node_id.to_string())
        } else {
            debug!(node_id, time, "first click recorded");
            self.last_clicked_node_id = Some(node_id.to_string());
            self.last_click_time = Some(time);
            None
        }
    }

    pub fn clear(&mut self) {
        self.last_clicked_node_id = None;
        self.last_click_time = None;
    }
}
