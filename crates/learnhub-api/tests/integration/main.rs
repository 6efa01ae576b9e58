//! HTTP-level tests driving the real router against an in-memory store.

mod auth_test;
mod helpers;
mod profile_test;
