pub mod batch;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod logging;
