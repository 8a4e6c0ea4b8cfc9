use anyhow::Context;
use sprouts::domain::config::SiteConfig;
use sprouts::kernel::config::load_config;
use sprouts_logger::{Logger, parse_level};
use sprouts_server::Server;

#[sprouts_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&cfg.logging.level))
        .json(cfg.logging.json)
        .maybe_path(cfg.logging.path.clone())
        .init()?;

    Server::builder().config(cfg).build()?.run().await
}
