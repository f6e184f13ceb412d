use async_trait::async_trait;

use crate::domain::event::PullRequestInfo;
use crate::domain::ticket::Ticket;
use crate::error::AppResult;

#[async_trait]
pub trait TicketTrackerService: Send + Sync {
    /// Looks up at most one ticket whose numeric ID property equals `number`.
    async fn fetch_by_number(&self, number: u64) -> AppResult<Option<Ticket>>;

    /// Creates a new ticket with the given title. Creation is unconditional;
    /// this never checks for an existing ticket first.
    async fn create_from_title(&self, title: &str) -> AppResult<Ticket>;

    /// Appends a comment on the ticket linking back to the pull request.
    async fn comment_pull_request_link(
        &self,
        ticket_id: &str,
        pull_request: &PullRequestInfo,
    ) -> AppResult<()>;
}
