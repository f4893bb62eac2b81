pub mod catalog;
pub mod days;
pub mod display;
pub mod import;
pub mod level;
pub mod meetings;
pub mod slug;
pub mod urls;
