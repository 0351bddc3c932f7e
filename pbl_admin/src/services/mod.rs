pub mod access_type;
pub mod educator;
pub mod pbl_file;
pub mod reference;
pub mod school;
pub mod unregistered;
