use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "LISTEN_IP")]
    #[arg(default_value = "0.0.0.0")]
    pub listen_ip: IpAddr,
    #[arg(long, env = "PORT")]
    #[arg(default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "MG_USERNAME", hide_env_values = true)]
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub mg_username: String,
    #[arg(long, env = "MG_PASSWORD", hide_env_values = true)]
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub mg_password: String,
    #[arg(long, env = "MG_UPSTREAM_URL")]
    #[arg(default_value = "http://version1.api.memegenerator.net/Instance_Create")]
    pub upstream_url: Url,
    /// Deadline for a single call to the meme generator API.
    #[arg(long, env = "MG_UPSTREAM_TIMEOUT_MS")]
    #[arg(default_value_t = 10_000)]
    pub upstream_timeout_ms: u64,
    /// Deadline for handling a whole inbound request.
    #[arg(long, env = "REQUEST_TIMEOUT_MS")]
    #[arg(default_value_t = 15_000)]
    pub request_timeout_ms: u64,
    /// How long in-flight requests may drain after a termination signal.
    #[arg(long, env = "SHUTDOWN_GRACE_MS")]
    #[arg(default_value_t = 1_000)]
    pub shutdown_grace_ms: u64,
}

impl Args {
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(self.listen_ip, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}
