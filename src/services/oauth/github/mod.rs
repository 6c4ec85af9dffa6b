pub mod client;
pub mod errors;
pub mod mock_github_oauth;
pub mod models;
pub mod service;
