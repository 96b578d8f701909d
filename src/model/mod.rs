//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into the types defined here at the data
//! layer boundary, so entity models never leak into services. Parameter structs describe
//! one operation each; update parameters use `Option<T>` for "field present" and
//! `Option<Option<T>>` for nullable references, where `Some(None)` means "set to null".

pub mod article;
pub mod category;
pub mod dict;
pub mod image;
pub mod pagination;
pub mod tag;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes a nullable field so that an explicit `null` becomes `Some(None)`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None`, which keeps
/// "leave untouched" distinct from "clear".
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
