pub mod config;
pub mod db;
pub mod errors;
pub mod form;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;
