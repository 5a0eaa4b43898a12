use super::BookQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PostingDto},
    error::ApplicationResult,
};

impl BookQueryService {
    /// The actor's own postings, newest first.
    pub async fn my_postings(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<PostingDto>> {
        let postings = self.posting_repo.list_by_seller(actor.id).await?;
        Ok(postings.into_iter().map(Into::into).collect())
    }
}
