//! content-service: HTML articles about a country and a topic, written by a
//! generative-language model.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
