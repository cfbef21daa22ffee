//! Modules layer - Infrastructure components behind the features
//!
//! Contains adapters for external resources such as the appeal store.

pub mod storage;
