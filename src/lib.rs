pub mod analytics;
pub mod config;
pub mod copy_client;
pub mod domain;
pub mod routes;
pub mod signup_store;
pub mod startup;
pub mod telemetry;
