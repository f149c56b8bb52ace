//! Duplicate Grouping
//!
//! Buckets products by normalized model and keeps the buckets that hold
//! more than one listing.

use crate::catalog::normalize::normalize_model;
use crate::domain::Product;
use indexmap::IndexMap;
use tracing::debug;

/// Group products sharing a normalized model.
///
/// Groups are keyed in first-seen order and members keep input order.
/// Products without a model are skipped. Only groups of two or more are
/// returned.
pub fn find_duplicates<'a, I>(products: I) -> IndexMap<String, Vec<&'a Product>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut groups: IndexMap<String, Vec<&'a Product>> = IndexMap::new();

    for product in products {
        let normalized = normalize_model(product.model());
        if normalized.is_empty() {
            continue;
        }
        groups.entry(normalized).or_default().push(product);
    }

    groups.retain(|_, members| members.len() > 1);
    debug!(groups = groups.len(), "Duplicate model groups found");
    groups
}
