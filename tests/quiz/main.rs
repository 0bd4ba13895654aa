//! Inventory Integration Tests
//!
//! Drive the full stack through the public facade:
//! - Paged answer collection across all five pages
//! - Scoring and the one-time automatic save
//! - Profile history, redisplay and deletion
//! - File-backed data directories surviving reopen

mod common;

mod flow;
mod persistence;
mod profile;
