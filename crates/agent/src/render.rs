//! Tool-call ledger and render loop.
//!
//! The session is re-scanned from the start after every update. Each paired
//! `filter_itineraries` call reaches the board exactly once: the ledger
//! remembers rendered calls, and calls whose payload failed to parse, so a
//! rescan never repeats a visible side effect.

use std::collections::BTreeSet;

use nora_core::{CriteriaError, FilterCriteria, ItineraryCatalog, ItineraryRecord};
use tracing::{debug, info, warn};

use crate::message::{Message, ToolCall, ToolCallId};
use crate::tools::ToolKind;

pub const NO_MATCHES_MESSAGE: &str =
    "No itineraries match your criteria. Try adjusting your preferences.";

/// Display surface for render events.
pub trait RecommendationBoard {
    fn show_itineraries(&mut self, call_id: &ToolCallId, records: &[&ItineraryRecord]);
    fn show_no_matches(&mut self, call_id: &ToolCallId);
    fn show_error(&mut self, call_id: &ToolCallId, error: &CriteriaError);
}

/// Per-session record of settled filter calls.
#[derive(Clone, Debug, Default)]
pub struct RenderedCallSet {
    rendered: BTreeSet<ToolCallId>,
    failed: BTreeSet<ToolCallId>,
}

impl RenderedCallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, call_id: &ToolCallId) -> bool {
        self.rendered.contains(call_id)
    }

    pub fn has_failed(&self, call_id: &ToolCallId) -> bool {
        self.failed.contains(call_id)
    }

    fn is_settled(&self, call_id: &ToolCallId) -> bool {
        self.contains(call_id) || self.has_failed(call_id)
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    pub fn clear(&mut self) {
        self.rendered.clear();
        self.failed.clear();
    }
}

/// What one scan did. `rendered` and `failed` only list calls settled by this
/// scan; `pending` lists filter calls still waiting for their result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub rendered: Vec<ToolCallId>,
    pub pending: Vec<ToolCallId>,
    pub failed: Vec<ToolCallId>,
}

impl ScanReport {
    pub fn is_quiet(&self) -> bool {
        self.rendered.is_empty() && self.failed.is_empty()
    }
}

pub struct RenderLoop<'a> {
    catalog: &'a ItineraryCatalog,
}

impl<'a> RenderLoop<'a> {
    pub fn new(catalog: &'a ItineraryCatalog) -> Self {
        Self { catalog }
    }

    pub fn scan(
        &self,
        messages: &[Message],
        ledger: &mut RenderedCallSet,
        board: &mut dyn RecommendationBoard,
    ) -> ScanReport {
        let mut report = ScanReport::default();

        for (index, message) in messages.iter().enumerate() {
            let calls = message.tool_calls();
            if calls.is_empty() {
                continue;
            }

            let answered = answered_calls(&messages[index + 1..]);
            for call in calls {
                match ToolKind::from_name(&call.name) {
                    Some(ToolKind::FilterItineraries) => {}
                    Some(ToolKind::GetClientInfo | ToolKind::RetrieveCompanyDocs) => continue,
                    None => {
                        debug!(
                            event_name = "agent.render.unrecognized_tool",
                            call_id = %call.id,
                            tool = %call.name,
                            "skipping unrecognized tool call"
                        );
                        continue;
                    }
                }

                if !answered.contains(&&call.id) {
                    report.pending.push(call.id.clone());
                    continue;
                }
                if ledger.is_settled(&call.id) {
                    continue;
                }

                self.render_call(call, ledger, board, &mut report);
            }
        }

        report
    }

    fn render_call(
        &self,
        call: &ToolCall,
        ledger: &mut RenderedCallSet,
        board: &mut dyn RecommendationBoard,
        report: &mut ScanReport,
    ) {
        let criteria = match FilterCriteria::from_arguments(&call.arguments) {
            Ok(criteria) => criteria,
            Err(error) => {
                warn!(
                    event_name = "agent.render.invalid_payload",
                    call_id = %call.id,
                    error = %error,
                    "filter call payload rejected"
                );
                board.show_error(&call.id, &error);
                ledger.failed.insert(call.id.clone());
                report.failed.push(call.id.clone());
                return;
            }
        };

        let matched = self.catalog.filter(&criteria);
        if matched.is_empty() {
            board.show_no_matches(&call.id);
        } else {
            board.show_itineraries(&call.id, &matched);
        }

        info!(
            event_name = "agent.render.rendered",
            call_id = %call.id,
            criteria = %criteria,
            matches = matched.len(),
            "filter results rendered"
        );
        ledger.rendered.insert(call.id.clone());
        report.rendered.push(call.id.clone());
    }
}

/// Ids answered by the run of tool results directly after an assistant turn.
fn answered_calls(following: &[Message]) -> Vec<&ToolCallId> {
    following.iter().map_while(Message::result_call_id).collect()
}
