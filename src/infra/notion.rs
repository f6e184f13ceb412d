use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::event::PullRequestInfo;
use crate::domain::ticket::Ticket;
use crate::error::{AppError, AppResult};
use crate::services::TicketTrackerService;

const NOTION_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// The numeric property tickets are looked up by.
const ID_PROPERTY: &str = "ID";
/// Title property name in the stories database.
const TITLE_PROPERTY: &str = "Story";
/// Status assigned to freshly created tickets.
const CREATED_STATUS: &str = "Review";

pub struct NotionClient {
    http: Client,
    token: String,
    stories_db_id: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: String, stories_db_id: String) -> Self {
        Self {
            http: Client::new(),
            token,
            stories_db_id,
            base_url: NOTION_API_BASE.to_string(),
        }
    }

    async fn post<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<R> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| AppError::TicketTracker(format!("failed to call Notion: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::TicketTracker(format!(
                "Notion responded with {status}: {body}"
            )));
        }

        response.json().await.map_err(|err| {
            AppError::TicketTracker(format!("failed to parse Notion response: {err}"))
        })
    }
}

#[async_trait]
impl TicketTrackerService for NotionClient {
    async fn fetch_by_number(&self, number: u64) -> AppResult<Option<Ticket>> {
        let request = NotionQueryRequest::by_id_number(number);
        let response: NotionQueryResponse = self
            .post(&format!("/databases/{}/query", self.stories_db_id), &request)
            .await?;

        Ok(response.results.into_iter().next().map(Ticket::from))
    }

    async fn create_from_title(&self, title: &str) -> AppResult<Ticket> {
        let request = NotionCreatePageRequest::story(&self.stories_db_id, title);
        let page: NotionPage = self.post("/pages", &request).await?;

        Ok(Ticket::from(page))
    }

    async fn comment_pull_request_link(
        &self,
        ticket_id: &str,
        pull_request: &PullRequestInfo,
    ) -> AppResult<()> {
        let request = NotionCreateCommentRequest {
            parent: CommentParent {
                page_id: ticket_id.to_string(),
            },
            rich_text: pull_request_link_text(pull_request),
        };
        let _: serde_json::Value = self.post("/comments", &request).await?;
        Ok(())
    }
}

/// Rich-text runs for the ticket-side comment: literal "Linked to " followed
/// by a hyperlinked `PR#<number>` token.
fn pull_request_link_text(pull_request: &PullRequestInfo) -> Vec<NotionRichText> {
    vec![
        NotionRichText::plain("Linked to "),
        NotionRichText::linked(
            format!("PR#{}", pull_request.number),
            pull_request.url.clone(),
        ),
    ]
}

impl From<NotionPage> for Ticket {
    fn from(page: NotionPage) -> Self {
        let title = page.title_text().unwrap_or_else(|| "unknown".to_string());
        Ticket {
            id: page.id,
            url: page.url,
            title,
        }
    }
}

#[derive(Serialize)]
struct NotionQueryRequest {
    filter: NotionNumberFilter,
    page_size: u8,
}

impl NotionQueryRequest {
    fn by_id_number(number: u64) -> Self {
        Self {
            filter: NotionNumberFilter {
                property: ID_PROPERTY.to_string(),
                number: NumberEquals { equals: number },
            },
            page_size: 1,
        }
    }
}

#[derive(Serialize)]
struct NotionNumberFilter {
    property: String,
    number: NumberEquals,
}

#[derive(Serialize)]
struct NumberEquals {
    equals: u64,
}

#[derive(Serialize)]
struct NotionCreatePageRequest {
    parent: DatabaseParent,
    properties: serde_json::Value,
}

impl NotionCreatePageRequest {
    fn story(database_id: &str, title: &str) -> Self {
        Self {
            parent: DatabaseParent {
                database_id: database_id.to_string(),
            },
            properties: serde_json::json!({
                (TITLE_PROPERTY): {
                    "type": "title",
                    "title": [{ "type": "text", "text": { "content": title } }],
                },
                "Status": {
                    "status": { "name": CREATED_STATUS },
                },
            }),
        }
    }
}

#[derive(Serialize)]
struct DatabaseParent {
    database_id: String,
}

#[derive(Serialize)]
struct NotionCreateCommentRequest {
    parent: CommentParent,
    rich_text: Vec<NotionRichText>,
}

#[derive(Serialize)]
struct CommentParent {
    page_id: String,
}

#[derive(Serialize)]
struct NotionRichText {
    text: NotionTextContent,
}

impl NotionRichText {
    fn plain(content: &str) -> Self {
        Self {
            text: NotionTextContent {
                content: content.to_string(),
                link: None,
            },
        }
    }

    fn linked(content: String, url: String) -> Self {
        Self {
            text: NotionTextContent {
                content,
                link: Some(NotionLink { url }),
            },
        }
    }
}

#[derive(Serialize)]
struct NotionTextContent {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<NotionLink>,
}

#[derive(Serialize)]
struct NotionLink {
    url: String,
}

#[derive(Deserialize)]
struct NotionQueryResponse {
    results: Vec<NotionPage>,
}

#[derive(Deserialize)]
struct NotionPage {
    id: String,
    url: String,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

impl NotionPage {
    /// Plain text of the page's title-type property, whatever it is named.
    fn title_text(&self) -> Option<String> {
        let title_runs = self
            .properties
            .values()
            .find(|value| value.get("type").and_then(|t| t.as_str()) == Some("title"))
            .and_then(|value| value.get("title"))
            .and_then(|runs| runs.as_array())?;

        let text = title_runs
            .iter()
            .filter_map(|run| run.get("plain_text").and_then(|t| t.as_str()))
            .collect::<String>();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_caps_results_at_one() {
        let request = NotionQueryRequest::by_id_number(42);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filter": { "property": "ID", "number": { "equals": 42 } },
                "page_size": 1,
            })
        );
    }

    #[test]
    fn create_request_sets_title_and_status() {
        let request = NotionCreatePageRequest::story("db-1", "Fix login bug");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["parent"]["database_id"], "db-1");
        assert_eq!(
            json["properties"]["Story"]["title"][0]["text"]["content"],
            "Fix login bug"
        );
        assert_eq!(json["properties"]["Status"]["status"]["name"], "Review");
    }

    #[test]
    fn comment_text_links_pull_request() {
        let pull_request = PullRequestInfo {
            number: 7,
            title: "Fix".to_string(),
            url: "https://github.com/acme/app/pull/7".to_string(),
            head_branch: "alice/42-fix".to_string(),
        };
        let runs = pull_request_link_text(&pull_request);
        let json = serde_json::to_value(&runs).unwrap();
        assert_eq!(json[0]["text"]["content"], "Linked to ");
        assert_eq!(json[1]["text"]["content"], "PR#7");
        assert_eq!(
            json[1]["text"]["link"]["url"],
            "https://github.com/acme/app/pull/7"
        );
        assert!(json[0]["text"].get("link").is_none());
    }

    #[test]
    fn extracts_title_property_from_page() {
        let page: NotionPage = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "url": "https://notion.so/abc",
            "properties": {
                "Status": { "type": "status", "status": { "name": "Review" } },
                "Story": {
                    "type": "title",
                    "title": [
                        { "plain_text": "Fix " },
                        { "plain_text": "login bug" },
                    ],
                },
            },
        }))
        .unwrap();

        let ticket = Ticket::from(page);
        assert_eq!(ticket.id, "abc");
        assert_eq!(ticket.url, "https://notion.so/abc");
        assert_eq!(ticket.title, "Fix login bug");
    }

    #[test]
    fn missing_title_property_falls_back_to_unknown() {
        let page: NotionPage = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "url": "https://notion.so/abc",
        }))
        .unwrap();

        assert_eq!(Ticket::from(page).title, "unknown");
    }
}
