use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};
use youtravel::cli::Args;
use youtravel::launch;

const VERBOSE_FILTER: &str = "youtravel=debug";

/// 初始化日志，`RUST_LOG` 优先于命令行的详细日志开关
fn init_tracing(default_filter: &str) -> reload::Handle<EnvFilter, Registry> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_handle = init_tracing(args.default_log_filter());

    let mode = args.launch_mode();
    let config = args.into_config()?;

    // 配置文件打开了详细日志且未设置 RUST_LOG
    if config.verbose && std::env::var_os("RUST_LOG").is_none() {
        let _ = log_handle.modify(|filter| *filter = EnvFilter::new(VERBOSE_FILTER));
    }

    launch(&config, mode).await
}
