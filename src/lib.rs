pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod poll;
pub mod proxy;
pub mod response;
pub mod routes;
pub mod state;
pub mod upstream;
