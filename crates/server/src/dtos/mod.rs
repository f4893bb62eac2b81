pub mod course;
pub mod session;
