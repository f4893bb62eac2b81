pub mod course;
pub mod import;
pub mod section;
pub mod session;
