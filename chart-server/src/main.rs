use chart_server::core::{Config, ServerState};
use chart_server::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境变量 + 日志
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Chart Server starting...");

    // 2. 初始化服务器状态 (打开数据库)
    std::fs::create_dir_all(&config.work_dir)?;
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器
    let app = chart_server::api::router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    tracing::info!(port = config.http_port, "HTTP API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
