pub mod authenticate;
pub mod claims;
pub mod github_login;
pub mod session;

pub use authenticate::handle_authenticate;
pub use session::handle_me;
