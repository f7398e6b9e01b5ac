pub mod config;
pub mod confirm;
pub mod drop;
pub mod error;
pub mod export;
pub mod present;
pub mod run;
pub mod select;
