// homeport-api: Async Rust client for the Homeport listing backend

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use types::{Agent, HouseType, Listing, ListingAgent};
