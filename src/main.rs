use clap::Parser;
use std::error::Error;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod memegen;
mod memes;

/// Time given to cancelled requests to write their error responses before the process exits.
const FLUSH_TIMEOUT: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Args::parse();
    logging::init();
    let app_context = app_context::init(&args)?;
    let upstream_cancellation = app_context.shutdown.clone();
    let router = http::router::new(&args, app_context);

    let listener = TcpListener::bind(args.listen_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for slash commands.");

    let stop_accepting = CancellationToken::new();
    tokio::spawn({
        let stop_accepting = stop_accepting.clone();
        async move {
            http::shutdown::termination_signal().await;
            stop_accepting.cancel();
        }
    });

    let server = axum::serve(listener, router)
        .with_graceful_shutdown({
            let stop_accepting = stop_accepting.clone();
            async move { stop_accepting.cancelled().await }
        })
        .into_future();
    tokio::pin!(server);
    let grace_period_elapsed = async {
        stop_accepting.cancelled().await;
        tokio::time::sleep(args.shutdown_grace()).await;
    };

    tokio::select! {
        result = &mut server => result?,
        _ = grace_period_elapsed => {
            tracing::warn!("Shutdown grace period elapsed, aborting in-flight requests.");
            upstream_cancellation.cancel();
            let _ = tokio::time::timeout(FLUSH_TIMEOUT, &mut server).await;
        }
    }
    tracing::info!("Exiting ...");
    Ok(())
}
