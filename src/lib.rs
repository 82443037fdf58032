//! Game List API - backend for named, user-owned game lists
//!
//! This crate provides the REST API for managing game lists:
//! - Creating, updating and deleting lists owned by the authenticated user
//! - Public/private visibility with ownership-scoped access
//! - A shared game catalog populated lazily from list updates

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod state;
