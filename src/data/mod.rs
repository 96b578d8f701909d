//! Database repository layer for all catalog entities.
//!
//! Repositories handle single-table operations (CRUD) for each entity and convert SeaORM
//! entity models into domain models at the boundary. Edges between entities are owned by
//! `association`, delete checks by `integrity`, and the tombstone filter every read starts
//! from by `live`. All repositories are generic over `ConnectionTrait` so services can run
//! them on a pooled connection or inside an open transaction.

pub mod article;
pub mod association;
pub mod blob;
pub mod category;
pub mod dict;
pub mod image;
pub mod integrity;
pub mod live;
pub mod tag;
pub mod user;
