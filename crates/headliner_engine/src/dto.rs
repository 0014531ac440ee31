use serde::Deserialize;

/// Wire payload of `GET /v2/top-headlines`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadlineResponseDto {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    pub articles: Vec<HeadlineDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadlineDto {
    pub source: SourceDto,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceDto {
    pub id: Option<String>,
    pub name: String,
}
