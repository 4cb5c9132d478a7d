//! Interactive menu loop.
//!
//! Generic over input/output so the whole loop can be driven from tests.

use std::io::{self, BufRead, Write};

use stockroom_infra::InventoryConfig;
use stockroom_inventory::ProductStore;

use crate::display;

/// One menu entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    FindByName,
    CountBySupplier,
    FilterBySupplier,
    QuantityStats,
    SearchByName,
    SortByPrice,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::DisplayAll,
        MenuChoice::FindByName,
        MenuChoice::CountBySupplier,
        MenuChoice::FilterBySupplier,
        MenuChoice::QuantityStats,
        MenuChoice::SearchByName,
        MenuChoice::SortByPrice,
        MenuChoice::Exit,
    ];

    pub fn key(self) -> u8 {
        match self {
            MenuChoice::DisplayAll => 1,
            MenuChoice::FindByName => 2,
            MenuChoice::CountBySupplier => 3,
            MenuChoice::FilterBySupplier => 4,
            MenuChoice::QuantityStats => 5,
            MenuChoice::SearchByName => 6,
            MenuChoice::SortByPrice => 7,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::DisplayAll => "Display all products",
            MenuChoice::FindByName => "Find product by name",
            MenuChoice::CountBySupplier => "Count products by supplier",
            MenuChoice::FilterBySupplier => "Filter products by supplier",
            MenuChoice::QuantityStats => "Quantity statistics",
            MenuChoice::SearchByName => "Search products by name",
            MenuChoice::SortByPrice => "Sort products by price (descending)",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed choice; anything other than a listed number is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let key: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Menu session over one store.
pub struct Menu<'a, R, W> {
    store: &'a mut ProductStore,
    config: &'a InventoryConfig,
    input: R,
    output: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut ProductStore, config: &'a InventoryConfig, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    tracing::debug!(?choice, "menu choice");
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid choice")?,
            }
            writeln!(self.output)?;
        }
        self.output.flush()
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "===== Inventory Menu =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Print `message`, then read one trimmed line. `None` on end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// session; the resulting text is then rejected like any other bad input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Execute one choice. Returns `false` if input ended mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::DisplayAll => {
                display::write_table(&mut self.output, self.store.iter())?;
            }
            MenuChoice::FindByName => {
                let Some(name) = self.prompt("Enter search name: ")? else {
                    return Ok(false);
                };
                match self.store.find_by_name(&name, self.config.name_case) {
                    Some(index) => writeln!(self.output, "Product found at index: {index}")?,
                    None => writeln!(self.output, "Product not found!")?,
                }
            }
            MenuChoice::CountBySupplier => {
                let counts = self.store.count_by_supplier();
                display::write_supplier_counts(&mut self.output, &counts)?;
            }
            MenuChoice::FilterBySupplier => {
                let Some(supplier) = self.prompt("Enter supplier name to filter: ")? else {
                    return Ok(false);
                };
                let matches = self.store.filter_by_supplier(&supplier, self.config.supplier_case);
                writeln!(self.output, "Products from supplier: {supplier}")?;
                display::write_table(&mut self.output, matches.iter().copied())?;
                if matches.is_empty() {
                    writeln!(self.output, "No supplier found")?;
                }
            }
            MenuChoice::QuantityStats => match self.store.quantity_stats() {
                Ok(stats) => display::write_quantity_stats(&mut self.output, &stats)?,
                Err(err) => writeln!(self.output, "Cannot compute statistics: {err}")?,
            },
            MenuChoice::SearchByName => {
                let Some(fragment) = self.prompt("Enter part of a product name: ")? else {
                    return Ok(false);
                };
                let matches = self.store.search_by_name_substring(&fragment);
                if matches.is_empty() {
                    writeln!(self.output, "No matching products")?;
                } else {
                    display::write_table(&mut self.output, matches)?;
                }
            }
            MenuChoice::SortByPrice => {
                self.store.sort_by_price_descending();
                writeln!(self.output, "Products sorted by price (highest first):")?;
                display::write_table(&mut self.output, self.store.iter())?;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listed_keys_only() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::DisplayAll));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::SortByPrice));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<u8> = MenuChoice::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MenuChoice::ALL.len());
    }
}
