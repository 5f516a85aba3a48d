//! Cart command - Inspect and change the shopping cart
//!
//! Provides the `shopcart cart` CLI command. The cart lives in local
//! storage between runs; every change goes through the storefront backend,
//! which returns the authoritative cart.

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use shopcart_core::domain::{CartDetails, CartMapping, ProductId};
use shopcart_sync::CartStore;

use crate::context::CliContext;
use crate::output::{format_price, get_formatter, truncate, OutputFormat, OutputFormatter};

/// Cart subcommands
#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show cart contents and total
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: ProductId,
        /// Number of units to add
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a product (0 or less removes it)
    Update {
        /// Product ID
        id: ProductId,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: ProductId,
    },
    /// Empty the cart (local only)
    Clear,
}

impl CartCommand {
    /// Execute the cart command
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);
        let store = ctx.open_cart_store().await?;

        let result = self.run(&store, format, &*formatter).await;
        store.shutdown().await;
        result
    }

    async fn run(
        &self,
        store: &CartStore,
        format: OutputFormat,
        formatter: &dyn OutputFormatter,
    ) -> Result<()> {
        match self {
            CartCommand::Show => {
                if store.has_items() && store.cart_details().is_none() {
                    store
                        .try_fetch_cart_details()
                        .await
                        .context("Failed to fetch cart details")?;
                }
                print_cart(store, format, formatter, None);
            }
            CartCommand::Add { id, quantity } => {
                info!(product_id = %id, quantity, "Adding to cart");
                store
                    .try_add_to_cart(*id, *quantity)
                    .await
                    .with_context(|| format!("Failed to add product {id} to cart"))?;
                let message = format!("Added {quantity} x product {id}");
                print_change(store, &message, format, formatter);
            }
            CartCommand::Update { id, quantity } => {
                info!(product_id = %id, quantity, "Updating cart");
                store
                    .try_update_quantity(*id, *quantity)
                    .await
                    .with_context(|| format!("Failed to update product {id}"))?;
                let message = if *quantity > 0 {
                    format!("Set product {id} to {quantity}")
                } else {
                    format!("Removed product {id}")
                };
                print_change(store, &message, format, formatter);
            }
            CartCommand::Remove { id } => {
                info!(product_id = %id, "Removing from cart");
                store
                    .try_remove_from_cart(*id)
                    .await
                    .with_context(|| format!("Failed to remove product {id}"))?;
                print_change(store, &format!("Removed product {id}"), format, formatter);
            }
            CartCommand::Clear => {
                store.try_clear_cart().await.context("Failed to clear cart")?;
                print_change(store, "Cart cleared", format, formatter);
            }
        }
        Ok(())
    }
}

fn print_change(
    store: &CartStore,
    message: &str,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) {
    if !format.is_json() {
        formatter.success(message);
    }
    print_cart(store, format, formatter, Some(message));
}

fn print_cart(
    store: &CartStore,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
    message: Option<&str>,
) {
    let items = store.cart_items();
    let details = store.cart_details();

    if format.is_json() {
        let mut value = cart_json(&items, details.as_ref());
        if let Some(message) = message {
            value["message"] = serde_json::Value::from(message);
        }
        formatter.print_json(&value);
        return;
    }

    if items.is_empty() {
        formatter.info("Cart is empty");
        return;
    }

    match details {
        Some(ref details) => {
            for line in cart_lines(details) {
                formatter.info(&line);
            }
        }
        None => {
            formatter.warn("Cart details unavailable, showing quantities only");
            for (product_id, quantity) in items.iter() {
                formatter.info(&format!("{:>4} x product {}", quantity.get(), product_id));
            }
        }
    }
    formatter.info(&format!(
        "{} item(s), total {}",
        store.items_count(),
        format_price(store.total_price())
    ));
}

fn cart_json(items: &CartMapping, details: Option<&CartDetails>) -> serde_json::Value {
    serde_json::json!({
        "cart": items,
        "items_count": items.total_quantity(),
        "details": details,
    })
}

/// Renders one `qty x name  subtotal` row per line item
fn cart_lines(details: &CartDetails) -> Vec<String> {
    details
        .items
        .iter()
        .map(|line| {
            let name = line
                .name
                .clone()
                .unwrap_or_else(|| format!("product {}", line.product_id));
            let subtotal = line
                .subtotal
                .or_else(|| line.price.map(|p| p * f64::from(line.quantity)))
                .map(format_price)
                .unwrap_or_else(|| "-".to_string());
            format!("{:>4} x {:<40}  {:>10}", line.quantity, truncate(&name, 40), subtotal)
        })
        .collect()
}
