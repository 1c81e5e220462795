pub mod init;
pub mod invoke;
