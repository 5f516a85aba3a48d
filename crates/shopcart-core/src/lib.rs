//! shopcart Core - Domain types and ports for the storefront client
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain types** - `ProductId`, `Quantity`, `CartMapping`, `CartDetails`, `Product`, `Category`
//! - **Port definitions** - Traits for adapters: `CatalogApi`, `CartApi`, `LocalStorage`
//! - **Configuration** - YAML-backed settings for the API client, storage and logging
//!
//! # Architecture
//!
//! The domain module contains plain data types with validation and no I/O.
//! Ports define trait interfaces that adapter crates implement: the HTTP
//! client in `shopcart-api` and the storage backends in `shopcart-cache`.
//! The cart store in `shopcart-sync` depends only on these traits.

pub mod config;
pub mod domain;
pub mod ports;
