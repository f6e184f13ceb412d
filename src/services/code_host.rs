use async_trait::async_trait;

use crate::domain::event::RepositoryInfo;
use crate::error::AppResult;

#[async_trait]
pub trait CodeHostService: Send + Sync {
    /// Appends a comment on the pull request. Returns `Ok(false)` when the
    /// code host answers with anything other than the canonical "created"
    /// status; transport failures are errors.
    async fn comment_on_pull_request(
        &self,
        repository: &RepositoryInfo,
        number: u64,
        body: &str,
    ) -> AppResult<bool>;
}
