use serde::{Deserialize, Serialize};

use crate::Headline;

/// Navigation targets exchanged between view-models and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Splash,
    HeadlineList,
    /// Detail screen payload carrying the full article field set.
    HeadlineDetails {
        author: String,
        title: String,
        description: String,
        url: String,
        url_to_image: String,
        published_at: String,
        content: String,
    },
}

impl Route {
    pub fn details_for(article: &Headline) -> Self {
        Route::HeadlineDetails {
            author: article.author.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            url: article.url.clone(),
            url_to_image: article.url_to_image.clone(),
            published_at: article.published_at.clone(),
            content: article.content.clone(),
        }
    }
}
