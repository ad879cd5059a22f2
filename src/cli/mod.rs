pub mod check;
pub mod example;
pub mod generate;
pub mod init;
