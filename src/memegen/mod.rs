//! Client for the memegenerator.net `Instance_Create` API.

pub mod client;
pub mod consts;
pub mod decode;
pub mod errors;
