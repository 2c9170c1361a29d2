pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod members;
pub mod ride;
pub mod settle;
