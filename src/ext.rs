//! Extension machinery shared by provider clients (request signing).

pub mod oauth1;

pub use oauth1::*;
