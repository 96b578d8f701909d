//! Service layer orchestrating repositories, edges and delete guards.
//!
//! Services validate input before touching storage, open a transaction whenever an
//! operation writes more than one row or checks before it acts, and translate repository
//! outcomes into `AppError` kinds. The transport layer only ever calls into this module.

pub mod article;
pub mod category;
pub mod dict;
pub mod image;
pub mod role;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;

use crate::{
    data::integrity::{BlockingRelation, EntityKind},
    error::AppError,
};

/// Builds the error for a delete vetoed by the integrity guard and logs the veto.
fn integrity_violation(kind: EntityKind, id: i32, relation: BlockingRelation) -> AppError {
    tracing::warn!(
        entity = kind.name(),
        id,
        %relation,
        "Delete blocked by live reference"
    );

    AppError::ReferentialIntegrity {
        entity: kind.name(),
        id,
        relation: relation.to_string(),
    }
}
