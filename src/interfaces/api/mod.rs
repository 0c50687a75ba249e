pub mod error;
pub mod routes;

// Re-export for convenience
pub use error::ApiError;
pub use routes::router;
