pub mod backend;
pub mod config;
pub mod router;
pub mod services;
pub mod startup;
pub mod tls;
