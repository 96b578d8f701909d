//! Content-management backend: the data-integrity and association layer.
//!
//! This crate sits between request handlers and the relational store. It owns the catalog
//! of articles, categories, tags, images, dictionary entries and users, the edges between
//! them, the guards that veto unsafe deletes, and the content-addressed image store.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Validation, transactions and error mapping
//! - **Data Layer** (`data/`) - Repositories, edges, delete guards and the blob directory
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and their classification
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations and upload directory
//! - **Utilities** (`util/`) - Password hashing and input validation
//!
//! Every normal read excludes tombstoned rows. Uniqueness and referential rules are
//! checked in the service layer inside a transaction and backed by live-row unique
//! indexes and restrict-on-delete foreign keys in the schema.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
