use crate::cli::args::ServeArgs;
use crate::exit_codes;
use bodyguard_server::{init_tracing, ServerConfig};

pub async fn run(args: ServeArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(ServerConfig::from_env(), &args);
    init_tracing(cfg.log_format)?;
    bodyguard_server::serve(cfg).await?;
    Ok(exit_codes::SUCCESS)
}

fn resolve_config(mut cfg: ServerConfig, args: &ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if let Some(n) = args.max_body_bytes {
        cfg.max_body_bytes = n.get();
    }
    if let Some(format) = args.log_format {
        cfg.log_format = format;
    }
    cfg
}
