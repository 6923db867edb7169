//! REST client for the clinic backend.

pub mod admin;
pub mod appointments;
pub mod auth;
pub mod client;
pub mod config;

pub use client::{ApiClient, ReqwestErrorExt};
