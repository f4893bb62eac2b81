pub mod classifications;
pub mod colleges;
pub mod courses;
pub mod institutions;
pub mod levels;
pub mod meetings;
pub mod sections;
pub mod session_classifications;
pub mod session_colleges;
pub mod session_infos;
pub mod session_levels;
pub mod sessions;
