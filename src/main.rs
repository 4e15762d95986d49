use crate::app::App;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::Context;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod templates;


fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.parse().unwrap_or_default()),
        )
        .init();

    // Listing data is validated once, before the first request.
    let app = Arc::new(App::new(&config).context("loading listing catalog")?);

    info!(addr = %config.addr, workers = config.workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.workers);

    server
        .serve(move |req: astra::Request, _info| {
            let started = Instant::now();
            let method = req.method().clone();
            let path = req.uri().path().to_owned();

            let resp = match handle(req, &app) {
                Ok(resp) => resp,
                Err(err) => error_to_response(err),
            };

            info!(
                %method,
                %path,
                status = resp.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request"
            );
            resp
        })
        .context("server ended with error")?;

    info!("server shut down cleanly");
    Ok(())
}
