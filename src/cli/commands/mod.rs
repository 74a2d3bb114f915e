pub mod add;
pub mod check;
pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod status;
