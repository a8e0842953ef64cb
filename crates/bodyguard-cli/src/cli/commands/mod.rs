use super::args::*;

pub mod scan;
pub mod serve;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Serve(args) => serve::run(args).await,
        Command::Scan(args) => scan::run(args),
    }
}
