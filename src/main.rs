#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args = hacktoberlist::cli::parser::parse_args(&args).unwrap_or_else(|err| err.exit());
    hacktoberlist::logging::init(&args.log_level)?;
    hacktoberlist::run::run(args, None).await
}
