//! Ordered, append-only record store.

use std::collections::BTreeMap;

use stockroom_core::{CaseSensitivity, QueryResult};
use stockroom_products::Product;

use crate::query::{self, QuantityStats, RecordIndex};

/// In-memory product store.
///
/// Store order is the order records were appended (file order on load). The
/// only operation that changes it is [`ProductStore::sort_by_price_descending`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductStore {
    records: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Product>) -> Self {
        Self { records }
    }

    /// Append one record at the end of store order.
    pub fn push(&mut self, product: Product) {
        self.records.push(product);
    }

    pub fn records(&self) -> &[Product] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: RecordIndex) -> Option<&Product> {
        self.records.get(index.zero_based())
    }

    pub fn find_by_name(&self, name: &str, case: CaseSensitivity) -> Option<RecordIndex> {
        query::find_by_name(&self.records, name, case)
    }

    pub fn count_by_supplier(&self) -> BTreeMap<String, usize> {
        query::count_by_supplier(&self.records)
    }

    pub fn filter_by_supplier(&self, supplier: &str, case: CaseSensitivity) -> Vec<&Product> {
        query::filter_by_supplier(&self.records, supplier, case)
    }

    pub fn quantity_stats(&self) -> QueryResult<QuantityStats<'_>> {
        query::quantity_stats(&self.records)
    }

    pub fn search_by_name_substring(&self, fragment: &str) -> Vec<&Product> {
        query::search_by_name_substring(&self.records, fragment)
    }

    /// Reorder the store in place, most expensive first.
    pub fn sort_by_price_descending(&mut self) {
        query::sort_by_price_descending(&mut self.records);
    }
}

impl FromIterator<Product> for ProductStore {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Product> for ProductStore {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ProductStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
