//! Backend API access for the product snapshot.

pub mod client;

pub use client::ApiClient;
