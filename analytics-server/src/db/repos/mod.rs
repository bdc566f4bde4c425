//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues plain SQL with
//! `$n` placeholders, which both SQLite and Postgres accept.

pub mod items;

pub use items::ItemRepo;
