use anyhow::Context;
use attendance_server::core::config::DEFAULT_ADMIN_PASSWORD;
use attendance_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 工作目录, 日志)
    let config = setup_environment().context("failed to prepare working directories")?;

    // 打印横幅
    print_banner();

    tracing::info!("Attendance server starting...");

    // 2. 配置摘要
    tracing::info!(
        port = config.http_port,
        database = %config.database_path,
        utc_offset_hours = config.utc_offset_hours,
        environment = %config.environment,
        "Configuration loaded"
    );
    if config.admin_password == DEFAULT_ADMIN_PASSWORD {
        tracing::warn!("ADMIN_PASSWORD not set, using the default password");
    }
    if std::env::var("JWT_SECRET").is_err() {
        tracing::warn!("JWT_SECRET not set, admin tokens are invalidated on restart");
    }

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
