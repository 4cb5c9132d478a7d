use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId};

use crate::price::Price;

/// One product record, as loaded from a single input line.
///
/// Records are immutable once built; the store may only reorder them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Price,
    quantity: i64,
    supplier: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
        quantity: i64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            supplier: supplier.into(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
