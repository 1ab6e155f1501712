//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL,
//! plus connection and schema bootstrap.

pub mod bootstrap;
pub mod wallet_repo;


pub use bootstrap::{connect, migrate};
pub use wallet_repo::PostgresWalletRepository;
