pub mod access_types_page;
pub mod educators_page;
pub mod pbl_files_page;
pub mod schools_page;
pub mod unregistered_page;
