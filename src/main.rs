use dadata_proxy::api::router;
use dadata_proxy::clients::{
    DadataConfig, DADATA, DEFAULT_CLEANER_URL, DEFAULT_SUGGESTIONS_URL, REQWEST,
};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    init_dadata()?;
    init_reqwest_client()?;

    // build our application with a route
    let app = router();

    info!("Running on port 3000");

    // run our app with hyper, listening globally on port 3000
    axum::Server::bind(&"0.0.0.0:3000".parse().unwrap())
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_dadata() -> color_eyre::Result<()> {
    let token = std::env::var("DADATA_TOKEN")?;
    let secret_key = std::env::var("DADATA_SECRET_KEY")
        .ok()
        .filter(|key| !key.is_empty());
    let suggestions_url = std::env::var("DADATA_SUGGESTIONS_URL")
        .unwrap_or_else(|_| DEFAULT_SUGGESTIONS_URL.to_string());
    let cleaner_url =
        std::env::var("DADATA_CLEANER_URL").unwrap_or_else(|_| DEFAULT_CLEANER_URL.to_string());
    DADATA
        .set(DadataConfig {
            token,
            secret_key,
            suggestions_url,
            cleaner_url,
        })
        .unwrap();
    Ok(())
}

fn init_reqwest_client() -> color_eyre::Result<()> {
    REQWEST.set(reqwest::Client::new()).unwrap();
    Ok(())
}
