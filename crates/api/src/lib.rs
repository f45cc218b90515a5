//! `tradelot-api` — HTTP surface for the marketplace.
//!
//! Route handlers stay thin: the authentication gate lives in `middleware`,
//! derived views in `tradelot-views`, and everything touches storage through
//! the `tradelot-store` collections.

pub mod app;
pub mod context;
pub mod middleware;
