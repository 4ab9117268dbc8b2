pub mod calculate;
pub mod extract;
pub mod init;
pub mod submit;
