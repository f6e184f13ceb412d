use tracing::debug;

use crate::context::AppContext;
use crate::domain::branch::{self, BranchMatch};
use crate::domain::event::{EventKind, TriggerEvent};
use crate::domain::ticket::{Ticket, title_from_slug};
use crate::error::{AppError, AppResult};

/// Named outputs emitted once both cross-link comments are in place.
/// `ticket_id` is the digit segment exactly as written in the branch name,
/// empty when the ticket was created rather than fetched.
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    pub ticket_id: String,
    pub ticket_name: String,
    pub ticket_url: String,
}

/// Runs the whole linking workflow for one "pull request opened" event:
/// validate, parse the head branch, resolve the ticket, publish both
/// cross-link comments. Every failure is terminal; nothing is retried or
/// rolled back.
pub async fn run(ctx: &AppContext, event: &TriggerEvent) -> AppResult<LinkOutcome> {
    validate(event)?;

    let branch = &event.pull_request.head_branch;
    let matched = branch::parse(branch)
        .ok_or_else(|| AppError::BranchPatternMismatch(branch.clone()))?;
    debug!(
        branch = %branch,
        ticket_number = ?matched.ticket_number,
        "branch name matched"
    );

    let ticket = resolve(ctx, &matched).await?;
    debug!(ticket_id = %ticket.id, "ticket resolved");

    publish_links(ctx, event, &matched, &ticket).await?;

    Ok(LinkOutcome {
        ticket_id: matched.number_text,
        ticket_name: ticket.title,
        ticket_url: ticket.url,
    })
}

fn validate(event: &TriggerEvent) -> AppResult<()> {
    if event.kind != EventKind::PullRequest {
        return Err(AppError::UnsupportedEvent(
            "this workflow only handles `pull_request` events".to_string(),
        ));
    }
    if event.action != "opened" {
        return Err(AppError::UnsupportedEvent(format!(
            "this workflow only handles the `opened` action, got `{}`",
            event.action
        )));
    }
    Ok(())
}

/// Exactly one of fetch/create runs per invocation. An explicit ticket number
/// that does not resolve is an author error, never a reason to create; a
/// missing number always creates.
async fn resolve(ctx: &AppContext, matched: &BranchMatch) -> AppResult<Ticket> {
    match matched.ticket_number {
        Some(number) => {
            debug!(number, "fetching ticket");
            ctx.ticket_tracker
                .fetch_by_number(number)
                .await?
                .ok_or(AppError::TicketNotFound(number))
        }
        None => {
            let title = title_from_slug(&matched.slug);
            debug!(title = %title, "creating ticket");
            ctx.ticket_tracker.create_from_title(&title).await
        }
    }
}

/// Posts the ticket-side comment and then the pull-request-side comment.
/// Both are attempted before either failure is surfaced; a posted comment is
/// never removed.
async fn publish_links(
    ctx: &AppContext,
    event: &TriggerEvent,
    matched: &BranchMatch,
    ticket: &Ticket,
) -> AppResult<()> {
    debug!("commenting pull request link on ticket");
    let ticket_side = ctx
        .ticket_tracker
        .comment_pull_request_link(&ticket.id, &event.pull_request)
        .await;

    let body = if matched.number_text.is_empty() {
        format!("Linked to [new ticket]({})", ticket.url)
    } else {
        format!("Linked to [NT-{}]({})", matched.number_text, ticket.url)
    };
    debug!("commenting ticket link on pull request");
    let pr_side = ctx
        .code_host
        .comment_on_pull_request(&event.repository, event.pull_request.number, &body)
        .await;

    if let Err(err) = ticket_side {
        return Err(AppError::CommentPublishFailure(format!(
            "ticket comment failed: {err}"
        )));
    }
    match pr_side {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::CommentPublishFailure(format!(
            "pull request comment was not created for {}/{}#{}",
            event.repository.owner_login, event.repository.name, event.pull_request.number
        ))),
        Err(err) => Err(AppError::CommentPublishFailure(format!(
            "pull request comment failed: {err}"
        ))),
    }
}
