//! Query engine: read-only lookups, grouping and statistics over a record
//! sequence, plus the single reordering operation.
//!
//! Every function takes the records by reference. None of them keep state
//! between calls, and only [`sort_by_price_descending`] mutates its input.
//!
//! Case policy per operation:
//! - name lookup and supplier filter take an explicit [`CaseSensitivity`]
//! - supplier grouping always uses the exact supplier text
//! - name substring search is always case-insensitive (both sides lowered)

use std::cmp::Reverse;
use std::collections::BTreeMap;

use stockroom_core::{CaseSensitivity, QueryError, QueryResult};
use stockroom_products::Product;

/// Position of a record in store order.
///
/// Held zero-based; [`RecordIndex::position`] and `Display` give the
/// 1-based form shown to users.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordIndex(usize);

impl RecordIndex {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    /// 1-based position.
    pub fn position(&self) -> usize {
        self.0 + 1
    }
}

impl core::fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.position(), f)
    }
}

/// Result of [`quantity_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStats<'a> {
    /// First record holding the maximum quantity.
    pub highest: &'a Product,
    /// First record holding the minimum quantity.
    pub lowest: &'a Product,
    /// Mean quantity, truncated toward zero.
    pub average: i64,
}

/// Exact name lookup. The earliest match in store order wins.
pub fn find_by_name(records: &[Product], name: &str, case: CaseSensitivity) -> Option<RecordIndex> {
    let found = records
        .iter()
        .position(|p| case.equals(p.name(), name))
        .map(RecordIndex::from_zero_based);

    tracing::debug!(name, %case, found = ?found.map(|i| i.position()), "find_by_name");
    found
}

/// Record count per exact supplier text, iterated in ascending supplier order.
pub fn count_by_supplier(records: &[Product]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for product in records {
        *counts.entry(product.supplier().to_string()).or_insert(0) += 1;
    }

    tracing::debug!(suppliers = counts.len(), "count_by_supplier");
    counts
}

/// All records from `supplier`, in store order. Empty when none match.
pub fn filter_by_supplier<'a>(
    records: &'a [Product],
    supplier: &str,
    case: CaseSensitivity,
) -> Vec<&'a Product> {
    let matches: Vec<&Product> = records
        .iter()
        .filter(|p| case.equals(p.supplier(), supplier))
        .collect();

    tracing::debug!(supplier, %case, matches = matches.len(), "filter_by_supplier");
    matches
}

/// Highest, lowest and average quantity in a single pass.
///
/// Ties at either extreme keep the earliest record. Fails with
/// [`QueryError::EmptyStore`] when there are no records.
pub fn quantity_stats(records: &[Product]) -> QueryResult<QuantityStats<'_>> {
    let (first, rest) = records.split_first().ok_or_else(QueryError::empty_store)?;

    let mut highest = first;
    let mut lowest = first;
    let mut total = i128::from(first.quantity());

    for product in rest {
        if product.quantity() > highest.quantity() {
            highest = product;
        }
        if product.quantity() < lowest.quantity() {
            lowest = product;
        }
        total += i128::from(product.quantity());
    }

    // i128 division truncates toward zero; the mean of i64 values fits in i64.
    let average = (total / records.len() as i128) as i64;

    tracing::debug!(
        highest = highest.quantity(),
        lowest = lowest.quantity(),
        average,
        "quantity_stats"
    );
    Ok(QuantityStats {
        highest,
        lowest,
        average,
    })
}

/// Records whose name contains `fragment`, ignoring case on both sides.
///
/// An empty fragment matches every record.
pub fn search_by_name_substring<'a>(records: &'a [Product], fragment: &str) -> Vec<&'a Product> {
    let needle = fragment.to_lowercase();
    let matches: Vec<&Product> = records
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&needle))
        .collect();

    tracing::debug!(fragment, matches = matches.len(), "search_by_name_substring");
    matches
}

/// Reorder in place by unit price, highest first.
///
/// `sort_by_key` is stable, so equal prices keep their prior relative order.
pub fn sort_by_price_descending(records: &mut [Product]) {
    records.sort_by_key(|p| Reverse(p.unit_price()));
    tracing::debug!(records = records.len(), "sort_by_price_descending");
}
