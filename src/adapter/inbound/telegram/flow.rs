//! Interval button flow: acknowledge, placeholder, rank, edit or resend.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::format::{acknowledge_text, gainers_text, loading_text};
use crate::application::metrics::RequestMetrics;
use crate::application::ranker::GainersRanker;
use crate::domain::interval::Interval;
use crate::port::outbound::chat::{ChatSurface, ConversationId};

/// One interval button tap.
#[derive(Debug, Clone)]
pub struct IntervalRequest {
    /// Callback query identifier to acknowledge.
    pub callback_id: String,
    /// Chat the button was tapped in.
    pub conversation: ConversationId,
    pub interval: Interval,
}

/// How the ranked list reached the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The loading placeholder was edited in place.
    Edited,
    /// Editing failed and the list was sent as a new message.
    Resent,
    /// Both the edit and the fallback send failed.
    Undelivered,
    /// The loading placeholder could not be sent; nothing was computed.
    Aborted,
}

impl FlowOutcome {
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Edited | Self::Resent)
    }
}

/// Runs the ranking for an interval tap and delivers the result.
#[derive(Clone)]
pub struct IntervalFlow {
    ranker: GainersRanker,
    metrics: Arc<RequestMetrics>,
}

impl IntervalFlow {
    #[must_use]
    pub fn new(ranker: GainersRanker, metrics: Arc<RequestMetrics>) -> Self {
        Self { ranker, metrics }
    }

    #[must_use]
    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    /// Run the flow on its own task so the caller can take the next update.
    ///
    /// Taps in the same chat are acknowledged while an earlier ranking is
    /// still running.
    pub fn spawn(
        &self,
        chat: Arc<dyn ChatSurface>,
        request: IntervalRequest,
    ) -> JoinHandle<FlowOutcome> {
        let flow = self.clone();
        tokio::spawn(async move { flow.run(chat.as_ref(), request).await })
    }

    /// Handle one tap. Chat failures are logged, never returned.
    pub async fn run(&self, chat: &dyn ChatSurface, request: IntervalRequest) -> FlowOutcome {
        let IntervalRequest {
            callback_id,
            conversation,
            interval,
        } = request;

        // Answer before ranking so the callback query does not expire.
        if let Err(e) = chat.acknowledge(&callback_id, acknowledge_text()).await {
            warn!(error = %e, "Failed to answer callback query");
        }

        let placeholder = match chat.send_text(conversation, &loading_text(interval)).await {
            Ok(handle) => handle,
            Err(e) => {
                error!(chat_id = conversation.0, error = %e, "Failed to send loading message");
                return FlowOutcome::Aborted;
            }
        };

        let entries = self.ranker.find_top_gainers(interval).await;
        let text = gainers_text(interval, &entries);

        let outcome = match chat.edit_text(conversation, placeholder, &text).await {
            Ok(()) => FlowOutcome::Edited,
            Err(e) => {
                warn!(chat_id = conversation.0, error = %e, "Failed to edit loading message, resending");
                match chat.send_text(conversation, &text).await {
                    Ok(_) => FlowOutcome::Resent,
                    Err(e) => {
                        error!(chat_id = conversation.0, error = %e, "Failed to send fallback message");
                        FlowOutcome::Undelivered
                    }
                }
            }
        };

        let served = self.metrics.record_served();
        info!(
            chat_id = conversation.0,
            %interval,
            entries = entries.len(),
            ?outcome,
            delivered = outcome.is_delivered(),
            served,
            "Gainers list handled"
        );

        outcome
    }
}
