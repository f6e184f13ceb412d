use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;

use crate::domain::event::{EventPayload, TriggerEvent};
use crate::error::{AppError, AppResult};

/// Reads the triggering event from the environment the automation runtime
/// prepares: the event name in `GITHUB_EVENT_NAME` and the webhook payload as
/// JSON in the file named by `GITHUB_EVENT_PATH`.
pub fn read_event() -> AppResult<TriggerEvent> {
    let event_name = env::var("GITHUB_EVENT_NAME")
        .map_err(|_| AppError::Configuration("GITHUB_EVENT_NAME is not set".to_string()))?;
    let event_path = env::var("GITHUB_EVENT_PATH")
        .map_err(|_| AppError::Configuration("GITHUB_EVENT_PATH is not set".to_string()))?;

    let contents = fs::read_to_string(&event_path)?;
    parse_event(&event_name, &contents)
}

/// Classifies the event by name before touching the payload: only
/// `pull_request` payloads carry the fields this workflow reads, so any other
/// event is refused here rather than failing deserialization.
pub fn parse_event(event_name: &str, payload_json: &str) -> AppResult<TriggerEvent> {
    if event_name != "pull_request" {
        return Err(AppError::UnsupportedEvent(format!(
            "this workflow only handles `pull_request` events, got `{event_name}`"
        )));
    }
    let payload: EventPayload = serde_json::from_str(payload_json)?;
    Ok(TriggerEvent::new(event_name, payload))
}

/// Publishes a named output for downstream workflow steps. Appends to the
/// file named by `GITHUB_OUTPUT`, or falls back to the legacy stdout command
/// when it is unset.
pub fn write_output(name: &str, value: &str) -> AppResult<()> {
    match env::var("GITHUB_OUTPUT") {
        Ok(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{name}={value}")?;
        }
        Err(_) => println!("::set-output name={name}::{value}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventKind;

    #[test]
    fn refuses_push_events_by_name() {
        let err = parse_event("push", r#"{"ref": "refs/heads/main"}"#).unwrap_err();
        match err {
            AppError::UnsupportedEvent(message) => assert!(message.contains("push")),
            other => panic!("expected UnsupportedEvent, got: {other}"),
        }
    }

    #[test]
    fn parses_pull_request_events() {
        let event = parse_event(
            "pull_request",
            r#"{
                "action": "opened",
                "pull_request": {
                    "number": 7,
                    "title": "Fix login bug",
                    "html_url": "https://github.com/acme/app/pull/7",
                    "head": { "ref": "alice/42-fix-login-bug" }
                },
                "repository": {
                    "name": "app",
                    "owner": { "login": "acme" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(event.kind, EventKind::PullRequest);
        assert_eq!(event.action, "opened");
        assert_eq!(event.pull_request.head_branch, "alice/42-fix-login-bug");
    }
}
