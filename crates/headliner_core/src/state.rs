use crate::Headline;

/// Observable snapshot for the headline list screen.
///
/// Replaced atomically by the owning view-model. `headlines` is always the
/// current `search_query` filter applied to the full fetched set; the full
/// set itself never reaches the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesState {
    pub title: String,
    pub search_query: String,
    pub headlines: Vec<Headline>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl HeadlinesState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            search_query: String::new(),
            headlines: Vec::new(),
            is_loading: false,
            is_error: false,
        }
    }
}
