mod models;
pub use models::*;

mod client;
pub use client::*;
