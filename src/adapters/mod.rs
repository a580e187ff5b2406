pub mod cache;
pub mod fetch_through;
pub mod http;
