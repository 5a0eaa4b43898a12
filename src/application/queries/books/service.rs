use std::sync::Arc;

use crate::domain::book::{BookReadRepository, PostingRepository};

pub struct BookQueryService {
    pub(super) read_repo: Arc<dyn BookReadRepository>,
    pub(super) posting_repo: Arc<dyn PostingRepository>,
}

impl BookQueryService {
    pub fn new(
        read_repo: Arc<dyn BookReadRepository>,
        posting_repo: Arc<dyn PostingRepository>,
    ) -> Self {
        Self {
            read_repo,
            posting_repo,
        }
    }
}
