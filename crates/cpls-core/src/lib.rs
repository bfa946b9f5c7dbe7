pub mod config;
pub mod logging;

pub mod aggregate;
pub mod api;
pub mod credentials;
pub mod error;
pub mod model;
pub mod output;
pub mod report;
