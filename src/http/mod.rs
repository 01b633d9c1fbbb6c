pub mod config;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod shutdown;
