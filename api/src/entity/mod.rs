//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. Kept separate from the
//! domain entities in `domain::entities`.

pub mod wallets;
