//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use stockroom_core::CaseSensitivity;
use stockroom_infra::{DEFAULT_DATA_PATH, InventoryConfig};

/// Load a product file and query it interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version)]
pub struct Args {
    /// Product file: one `id,name,price,quantity,supplier` record per line.
    #[arg(short, long, env = "STOCKROOM_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Case policy for exact product-name lookup.
    #[arg(long, env = "STOCKROOM_NAME_CASE", default_value_t = CaseSensitivity::Sensitive)]
    pub name_case: CaseSensitivity,

    /// Case policy for supplier filtering.
    #[arg(long, env = "STOCKROOM_SUPPLIER_CASE", default_value_t = CaseSensitivity::Insensitive)]
    pub supplier_case: CaseSensitivity,
}

impl Args {
    pub fn into_config(self) -> InventoryConfig {
        InventoryConfig {
            data_path: self.data,
            name_case: self.name_case,
            supplier_case: self.supplier_case,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let args = Args::try_parse_from([
            "stockroom",
            "--data",
            "stock.txt",
            "--name-case",
            "insensitive",
            "--supplier-case",
            "sensitive",
        ])
        .unwrap();

        let config = args.into_config();
        assert_eq!(config.data_path, PathBuf::from("stock.txt"));
        assert_eq!(config.name_case, CaseSensitivity::Insensitive);
        assert_eq!(config.supplier_case, CaseSensitivity::Sensitive);
    }

    #[test]
    fn rejects_unknown_case_policy() {
        let result = Args::try_parse_from(["stockroom", "--name-case", "loose"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
