use product_api::infrastructure::{config::load_config, logger::Logger};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;
    config.validate()?;

    Logger::init(&config.logging.level);

    match source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    product_api::server::run(config).await
}
