//! Derived fields written by the `before_save` hooks of the catalog entities.

use chrono::Utc;
use models::slug::slug_from_name;
use sea_orm::{
    ActiveValue::{self, Set},
    Value,
    prelude::DateTime,
};

/// The value an active model will write or already holds
pub fn active_value<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<Value>,
{
    match value {
        ActiveValue::Set(value) | ActiveValue::Unchanged(value) => Some(value),
        ActiveValue::NotSet => None,
    }
}

/// Overwrites `slug` with the slug of `name` when a non-empty name is present
pub fn derive_slug(name: &ActiveValue<String>, slug: &mut ActiveValue<String>) {
    if let Some(derived) = active_value(name).and_then(|name| slug_from_name(name)) {
        *slug = Set(derived);
    }
}

/// Captures the current time for the row being written
///
/// `created_at` is only filled on insert, and only if the caller has not set
/// it. `updated_at` is refreshed on every save.
pub fn stamp(
    created_at: &mut ActiveValue<DateTime>,
    updated_at: &mut ActiveValue<DateTime>,
    insert: bool,
) {
    let now = Utc::now().naive_utc();

    if insert && matches!(created_at, ActiveValue::NotSet) {
        *created_at = Set(now);
    }
    *updated_at = Set(now);
}
