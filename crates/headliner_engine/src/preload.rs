use std::time::Duration;

/// Best-effort image prefetch. Implementations must never block the caller
/// or surface failures; there is no completion tracking.
pub trait ImagePreloader: Send + Sync {
    fn enqueue(&self, url: &str);
}

/// Warms the connection/OS cache by fetching each image in the background
/// and dropping the body. Failures are logged at debug level and ignored.
pub struct HttpImagePreloader {
    client: reqwest::Client,
}

impl HttpImagePreloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("http client"),
        }
    }
}

impl Default for HttpImagePreloader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImagePreloader for HttpImagePreloader {
    fn enqueue(&self, url: &str) {
        if url.is_empty() {
            return;
        }
        let client = self.client.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => {
                    let _ = response.bytes().await;
                }
                Err(err) => log::debug!("image preload failed for {url}: {err}"),
            }
        });
    }
}
