use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::Serialize;
use tracing::debug;

use crate::domain::event::RepositoryInfo;
use crate::error::{AppError, AppResult};
use crate::services::CodeHostService;

const GITHUB_API_BASE: &str = "https://api.github.com";

pub struct GitHubClient {
    http: Client,
    token: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url: GITHUB_API_BASE.to_string(),
        }
    }

    fn comments_endpoint(&self, repository: &RepositoryInfo, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{number}/comments",
            self.base_url, repository.owner_login, repository.name
        )
    }
}

#[async_trait]
impl CodeHostService for GitHubClient {
    async fn comment_on_pull_request(
        &self,
        repository: &RepositoryInfo,
        number: u64,
        body: &str,
    ) -> AppResult<bool> {
        let request_body = CreateCommentRequest {
            body: body.to_string(),
        };
        let response = self
            .http
            .post(self.comments_endpoint(repository, number))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "notion-linker")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::CodeHost(format!("failed to call GitHub: {err}")))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            debug!(
                "HTTP {status} createComment(owner={}, repo={}, issue_number={number})",
                repository.owner_login, repository.name
            );
            return Ok(false);
        }
        Ok(true)
    }
}

#[derive(Serialize)]
struct CreateCommentRequest {
    body: String,
}
