#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let config = taskmaster_server::config::Config::from_env()?;
    taskmaster_server::web::start_web_server(config).await
}
