pub mod require_login;
pub mod require_logout;

// Re-export middleware components for easier access
pub use require_login::RequireLogin;
pub use require_logout::RequireLogout;
