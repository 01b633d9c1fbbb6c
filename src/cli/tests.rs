use crate::cli::Args;
use clap::Parser;
use std::{net::IpAddr, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_ip: IpAddr::from_str("127.0.0.1").expect("Failed to construct fake listen IP."),
        port: 8080,
        mg_username: String::from("testUser"),
        mg_password: String::from("testPassword"),
        upstream_url: Url::from_str("http://127.0.0.1:9/Instance_Create")
            .expect("Failed to construct fake upstream URL."),
        upstream_timeout_ms: 2_000,
        request_timeout_ms: 5_000,
        shutdown_grace_ms: 100,
    }
}

pub fn fake_args_with_upstream(upstream_url: Url) -> Args {
    Args {
        upstream_url,
        ..fake_args()
    }
}

#[test]
fn test_defaults_are_applied() {
    let args = Args::try_parse_from([
        "meme-slash-server",
        "--mg-username",
        "alice",
        "--mg-password",
        "secret",
    ])
    .expect("Failed to parse arguments.");

    assert_eq!(args.listen_ip.to_string(), "0.0.0.0");
    assert_eq!(
        args.upstream_url.as_str(),
        "http://version1.api.memegenerator.net/Instance_Create"
    );
    assert_eq!(args.upstream_timeout().as_secs(), 10);
    assert_eq!(args.shutdown_grace().as_millis(), 1_000);
}

#[test]
fn test_empty_credentials_are_rejected() {
    let result = Args::try_parse_from([
        "meme-slash-server",
        "--mg-username",
        "",
        "--mg-password",
        "secret",
    ]);

    assert!(result.is_err());
}
