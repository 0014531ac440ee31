use std::sync::Arc;

use headliner_core::{AppResult, Headline};

use crate::repository::HeadlineRepository;

/// Pass-through use case; the seam the headline list view-model depends on.
pub struct GetHeadlines {
    repository: Arc<dyn HeadlineRepository>,
}

impl GetHeadlines {
    pub fn new(repository: Arc<dyn HeadlineRepository>) -> Self {
        Self { repository }
    }

    pub async fn call(&self) -> AppResult<Vec<Headline>> {
        self.repository.get_headlines().await
    }
}
