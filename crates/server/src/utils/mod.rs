pub mod error;
pub mod shutdown;
