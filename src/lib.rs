//! Ripple content service library
//!
//! Turns an authenticated identity plus a requested operation into a
//! validated, consistent mutation or read over four related entities
//! (User, Post, Comment, Like).
//!
//! # Modules
//!
//! - `auth`: token-based identity resolution and password hashing
//! - `config`: configuration management
//! - `db`: entity store (repositories over SQLite)
//! - `error`: error types and handling
//! - `handlers`: HTTP request handlers
//! - `models`: data structures for users, posts, comments, likes
//! - `services`: business logic layer with ownership enforcement

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
