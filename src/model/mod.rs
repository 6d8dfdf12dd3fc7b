//! Records, request/response shapes, and the store boundary.

pub mod api;
pub mod auth;
pub mod common;
pub mod db;
pub mod mongodb;
