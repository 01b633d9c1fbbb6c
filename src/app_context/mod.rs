use crate::cli::Args;
use crate::memegen::client::{Credentials, MemeGeneratorClient};
use tokio_util::sync::CancellationToken;

/// Dependencies shared by every request. All of it is read-only after startup.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub memegen: MemeGeneratorClient,
    /// Cancelled once the shutdown grace period runs out. Requests derive child tokens from it.
    pub shutdown: CancellationToken,
}

pub fn init(args: &Args) -> Result<AppContext, reqwest::Error> {
    let credentials = Credentials {
        username: args.mg_username.clone(),
        password: args.mg_password.clone(),
    };
    let memegen =
        MemeGeneratorClient::new(args.upstream_url.clone(), credentials, args.upstream_timeout())?;
    tracing::info!(
        username = memegen.username(),
        upstream_url = %args.upstream_url,
        "Using meme generator API credentials."
    );
    Ok(AppContext {
        memegen,
        shutdown: CancellationToken::new(),
    })
}
