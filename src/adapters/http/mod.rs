pub mod client;
pub mod endpoints;

pub use client::HttpFetcher;
pub use endpoints::PokeApiEndpoints;
