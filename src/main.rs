use courier_client::config::ApiConfig;
use courier_client::request::request;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let config = ApiConfig::from_env()?;
    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let x = request(&config, &path, None).await?;
    println!("{:#?}", x);

    Ok(())
}

fn init() -> eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .init();

    Ok(())
}
