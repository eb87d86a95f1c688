pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod slug;
pub mod store;
pub mod templates;
pub mod web;
