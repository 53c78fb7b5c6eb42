//! Shared data contracts between the front-end and the API server.

pub mod domain;
