//! Subscriber appeals feature.
//!
//! Accepts service complaints, validates them and stores each accepted appeal
//! as its own JSON file.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/appeals` | No | Submit an appeal |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validator;

pub use services::AppealService;
