use serde::Deserialize;

/// Kind of the triggering notification, parsed from the event-name string
/// supplied by the automation runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Other(String),
}

impl EventKind {
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "pull_request" => EventKind::PullRequest,
            other => EventKind::Other(other.to_string()),
        }
    }
}

/// One "pull request" notification as delivered by the code host.
///
/// Owned by the dispatcher for the duration of a single invocation and never
/// persisted.
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    pub kind: EventKind,
    pub action: String,
    pub pull_request: PullRequestInfo,
    pub repository: RepositoryInfo,
}

impl TriggerEvent {
    pub fn new(event_name: &str, payload: EventPayload) -> Self {
        Self {
            kind: EventKind::from_event_name(event_name),
            action: payload.action,
            pull_request: PullRequestInfo {
                number: payload.pull_request.number,
                title: payload.pull_request.title,
                url: payload.pull_request.html_url,
                head_branch: payload.pull_request.head.r#ref,
            },
            repository: RepositoryInfo {
                owner_login: payload.repository.owner.login,
                name: payload.repository.name,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub head_branch: String,
}

#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    pub owner_login: String,
    pub name: String,
}

/// Wire shape of the webhook payload, limited to the fields this workflow
/// consumes.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub action: String,
    pub pull_request: PullRequestPayload,
    pub repository: RepositoryPayload,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub head: HeadPayload,
}

#[derive(Debug, Deserialize)]
pub struct HeadPayload {
    pub r#ref: String,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryPayload {
    pub name: String,
    pub owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
pub struct OwnerPayload {
    pub login: String,
}
