pub mod calculator;
pub mod config;
pub mod del;
pub mod logic;
pub mod ride;
