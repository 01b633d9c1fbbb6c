pub mod errors;
pub mod handlers;
pub mod requests;
pub mod responses;
