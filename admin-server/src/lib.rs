//! Storefront admin server
//!
//! Back-office service for an e-commerce catalog: brands, products,
//! categories, customers, and orders. The admin UI talks to the HTTP API in
//! [`api`]; order pricing and number generation live in [`orders`]; slug
//! derivation in [`catalog`]; persistence in [`db`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod orders;
pub mod state;
