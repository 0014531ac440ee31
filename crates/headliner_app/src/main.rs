mod app;
mod config;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
