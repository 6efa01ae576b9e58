//! # learnhub-entity
//!
//! Domain entity models for LearnHub. Database entities derive
//! `sqlx::FromRow` in addition to the serde traits.

pub mod user;
