//! Build-time configuration.
//!
//! The source token and API key are baked in at compile time, mirroring the
//! build-variant setup of the original product: one binary per news source.

/// Compile-time selected news source token.
pub fn news_source() -> &'static str {
    option_env!("NEWS_SOURCE").unwrap_or("bbc-news")
}

/// API key sent as `X-Api-Key` on every request.
pub fn api_key() -> anyhow::Result<&'static str> {
    option_env!("NEWS_API_KEY")
        .ok_or_else(|| anyhow::anyhow!("NEWS_API_KEY was not set when this binary was built"))
}

/// Display label shown as the list title.
pub fn app_name() -> &'static str {
    label_for(news_source())
}

fn label_for(source: &str) -> &'static str {
    match source {
        "bbc-news" => "BBC",
        "cnn" => "CNN",
        _ => "News",
    }
}
