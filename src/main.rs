#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(e) = user_list::telemetry::init() {
        eprintln!("could not install the tracing subscriber: {}", e);
    }
    if let Err(e) = run().await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn run() -> Result<(), user_list::model::Error> {
    use user_list::{model::AppState, model::site_addr, router};

    let state = AppState::from_env()?;
    let addr = site_addr()?;
    let app = router::new(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the server needs the ssr feature, there is no client side entry point
}
