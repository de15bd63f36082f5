//! # Menu Loop
//!
//! The numbered menu and its dispatch to the core and store APIs.
//!
//! ## Menu Map
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │   1. Add Product             → Inventory::add_product          │
//! │   2. Remove Product          → Inventory::remove_product       │
//! │   3. Sell Product            → Inventory::sell_product         │
//! │   4. Restock Product         → Inventory::restock_product      │
//! │   5. Search by Name          → Inventory::search_by_name       │
//! │   6. Search by Type          → Inventory::search_by_type       │
//! │   7. List All Products       → Inventory::list_all_products    │
//! │   8. Total Inventory Value   → Inventory::total_inventory_value│
//! │   9. Remove Expired Products → Inventory::remove_expired_...   │
//! │  10. Save Inventory to File  → stockroom_store::save_to_file   │
//! │  11. Load Inventory from File→ stockroom_store::load_from_file │
//! │  12. Exit                                                      │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operation errors are printed and the loop continues; nothing here is
//! fatal. A failed load leaves the current inventory in place, since the
//! loaded replacement is only swapped in on success.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use stockroom_core::{validation, Inventory, Product, ProductType};

use crate::console::Console;
use crate::paths;

/// Runs the menu loop until Exit or end of input.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    loop {
        show_menu(console)?;
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            break;
        };
        debug!(choice = %choice, "Menu selection");

        match choice.as_str() {
            "1" => add_product(console, inventory)?,
            "2" => remove_product(console, inventory)?,
            "3" => sell_product(console, inventory)?,
            "4" => restock_product(console, inventory)?,
            "5" => search_by_name(console, inventory)?,
            "6" => search_by_type(console, inventory)?,
            "7" => list_all_products(console, inventory)?,
            "8" => total_inventory_value(console, inventory)?,
            "9" => remove_expired_products(console, inventory)?,
            "10" => save_inventory(console, inventory)?,
            "11" => load_inventory(console, inventory)?,
            "12" => {
                writeln!(console.output, "Exiting...")?;
                break;
            }
            _ => writeln!(console.output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    writeln!(console.output)?;
    writeln!(console.output, "=== Stockroom Inventory Manager ===")?;
    writeln!(console.output, " 1. Add Product")?;
    writeln!(console.output, " 2. Remove Product")?;
    writeln!(console.output, " 3. Sell Product")?;
    writeln!(console.output, " 4. Restock Product")?;
    writeln!(console.output, " 5. Search by Name")?;
    writeln!(console.output, " 6. Search by Type")?;
    writeln!(console.output, " 7. List All Products")?;
    writeln!(console.output, " 8. Total Inventory Value")?;
    writeln!(console.output, " 9. Remove Expired Products")?;
    writeln!(console.output, "10. Save Inventory to File")?;
    writeln!(console.output, "11. Load Inventory from File")?;
    writeln!(console.output, "12. Exit")?;
    Ok(())
}

// =============================================================================
// Actions
// =============================================================================

fn add_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let Some(product_type) =
        console.prompt_product_type("Enter product type (Electronics/Grocery/Clothing): ")?
    else {
        return Ok(());
    };
    let Some(id) = console.prompt_validated("Enter product ID: ", validation::validate_product_id)?
    else {
        return Ok(());
    };
    let Some(name) =
        console.prompt_validated("Enter product name: ", validation::validate_product_name)?
    else {
        return Ok(());
    };
    let Some(price) = console.prompt_price("Enter product price: ")? else {
        return Ok(());
    };
    let Some(quantity) = console.prompt_u32("Enter stock quantity: ")? else {
        return Ok(());
    };

    debug!(id = %id, product_type = %product_type, "Adding product");

    let product = match product_type {
        ProductType::Electronics => {
            let Some(warranty_years) = console.prompt_u32("Enter warranty years: ")? else {
                return Ok(());
            };
            let Some(brand) = console.prompt("Enter brand: ")? else {
                return Ok(());
            };
            Product::electronics(id, name, price, quantity, warranty_years, brand)
        }
        ProductType::Grocery => {
            let Some(expiry_date) = console.prompt_date("Enter expiry date (YYYY-MM-DD): ")? else {
                return Ok(());
            };
            Product::grocery(id, name, price, quantity, expiry_date)
        }
        ProductType::Clothing => {
            let Some(size) = console.prompt("Enter size: ")? else {
                return Ok(());
            };
            let Some(material) = console.prompt("Enter material: ")? else {
                return Ok(());
            };
            Product::clothing(id, name, price, quantity, size, material)
        }
    };

    match product.and_then(|p| inventory.add_product(p)) {
        Ok(()) => writeln!(console.output, "Product added successfully."),
        Err(err) => writeln!(console.output, "{}", err),
    }
}

fn remove_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let Some(id) = console.prompt_validated("Enter product ID: ", validation::validate_product_id)?
    else {
        return Ok(());
    };

    match inventory.remove_product(&id) {
        Ok(product) => writeln!(console.output, "Removed: {}", product),
        Err(err) => writeln!(console.output, "{}", err),
    }
}

fn sell_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let Some(id) = console.prompt_validated("Enter product ID: ", validation::validate_product_id)?
    else {
        return Ok(());
    };
    let Some(quantity) = console.prompt_u32("Enter quantity to sell: ")? else {
        return Ok(());
    };

    match inventory.sell_product(&id, quantity) {
        Ok(()) => writeln!(console.output, "Sold {} units of product {}.", quantity, id),
        Err(err) => writeln!(console.output, "{}", err),
    }
}

fn restock_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let Some(id) = console.prompt_validated("Enter product ID: ", validation::validate_product_id)?
    else {
        return Ok(());
    };
    let Some(amount) = console.prompt_u32("Enter quantity to restock: ")? else {
        return Ok(());
    };

    match inventory.restock_product(&id, amount) {
        Ok(()) => writeln!(console.output, "Restocked {} units of product {}.", amount, id),
        Err(err) => writeln!(console.output, "{}", err),
    }
}

fn search_by_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter product name to search: ")? else {
        return Ok(());
    };

    print_products(console, &inventory.search_by_name(&name))
}

fn search_by_type<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    let Some(product_type) =
        console.prompt_product_type("Enter product type (Electronics/Grocery/Clothing): ")?
    else {
        return Ok(());
    };

    print_products(console, &inventory.search_by_type(product_type))
}

fn list_all_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    if inventory.is_empty() {
        return writeln!(console.output, "Inventory is empty.");
    }

    print_products(console, &inventory.list_all_products())
}

fn total_inventory_value<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    writeln!(
        console.output,
        "Total inventory value: ${:.2}",
        inventory.total_inventory_value()
    )
}

fn remove_expired_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let removed = inventory.remove_expired_products();

    if removed.is_empty() {
        writeln!(console.output, "No expired products found.")
    } else {
        writeln!(
            console.output,
            "Removed {} expired product(s): {}",
            removed.len(),
            removed.join(", ")
        )
    }
}

fn save_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
) -> io::Result<()> {
    let Some(path) =
        prompt_file_path(console, "Enter filename to save inventory (blank for default): ")?
    else {
        return Ok(());
    };

    match stockroom_store::save_to_file(inventory, &path) {
        Ok(()) => writeln!(console.output, "Inventory saved to {}.", path.display()),
        Err(err) => writeln!(console.output, "{}", err),
    }
}

fn load_inventory<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> io::Result<()> {
    let Some(path) =
        prompt_file_path(console, "Enter filename to load inventory (blank for default): ")?
    else {
        return Ok(());
    };

    match stockroom_store::load_from_file(&path) {
        Ok(loaded) => {
            // Replace the working inventory only once the whole file decoded
            let count = loaded.len();
            *inventory = loaded;
            writeln!(
                console.output,
                "Loaded {} product(s) from {}.",
                count,
                path.display()
            )
        }
        Err(err) => writeln!(console.output, "{}", err),
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

fn print_products<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    products: &[&Product],
) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(console.output, "No products found.");
    }

    for product in products {
        writeln!(console.output, "{}", product)?;
    }
    Ok(())
}

/// Asks for a filename; blank falls back to the default inventory path.
fn prompt_file_path<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> io::Result<Option<PathBuf>> {
    let Some(entered) = console.prompt(label)? else {
        return Ok(None);
    };

    if !entered.is_empty() {
        return Ok(Some(PathBuf::from(entered)));
    }

    match paths::default_inventory_path() {
        Ok(path) => Ok(Some(path)),
        Err(err) => {
            writeln!(console.output, "No default path available: {}", err)?;
            Ok(None)
        }
    }
}

// =============================================================================
// Menu Tests
// =============================================================================
