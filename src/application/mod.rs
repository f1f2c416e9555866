//! Application layer containing the core operations.
//!
//! `calculator` is the pure arithmetic engine. `user_service` holds the
//! `UserService`, which validates input and coordinates the persistence and
//! notification ports for the user lifecycle.

pub mod calculator;
pub mod user_service;
