//! Fixed-width table output.

use std::collections::BTreeMap;
use std::io::{self, Write};

use stockroom_core::Entity;
use stockroom_inventory::QuantityStats;
use stockroom_products::Product;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 30;
const PRICE_WIDTH: usize = 12;
const QUANTITY_WIDTH: usize = 10;
const SUPPLIER_WIDTH: usize = 20;

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}{:<QUANTITY_WIDTH$}{:<SUPPLIER_WIDTH$}",
        "ID", "Product Name", "Unit Price", "Quantity", "Supplier"
    )
}

pub fn write_product<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}{:<QUANTITY_WIDTH$}{:<SUPPLIER_WIDTH$}",
        product.id(),
        product.name(),
        product.unit_price(),
        product.quantity(),
        product.supplier()
    )
}

/// Header followed by one row per product.
pub fn write_table<'a, W, I>(out: &mut W, products: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    write_header(out)?;
    for product in products {
        write_product(out, product)?;
    }
    Ok(())
}

pub fn write_supplier_counts<W: Write>(out: &mut W, counts: &BTreeMap<String, usize>) -> io::Result<()> {
    writeln!(out, "Supplier Count:")?;
    for (supplier, count) in counts {
        writeln!(out, "{supplier:<SUPPLIER_WIDTH$}: {count} products")?;
    }
    Ok(())
}

pub fn write_quantity_stats<W: Write>(out: &mut W, stats: &QuantityStats<'_>) -> io::Result<()> {
    writeln!(out, "Highest quantity:")?;
    write_table(out, [stats.highest])?;
    writeln!(out, "Lowest quantity:")?;
    write_table(out, [stats.lowest])?;
    writeln!(out, "Average quantity: {}", stats.average)
}
