//! Products command - Browse the product catalog
//!
//! Provides the `shopcart products` CLI command which:
//! 1. Lists all products, or the products of one category
//! 2. Shows the details of a single product

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use shopcart_core::domain::{CategoryId, Product, ProductId};

use super::lookup_error;
use crate::context::CliContext;
use crate::output::{format_price, get_formatter, truncate, OutputFormat};

/// Products subcommands
#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    List {
        /// Only products of this category
        #[arg(long)]
        category: Option<CategoryId>,
    },
    /// Show one product
    Show {
        /// Product ID
        id: ProductId,
    },
}

impl ProductsCommand {
    /// Execute the products command
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<()> {
        match self {
            ProductsCommand::List { category } => self.execute_list(ctx, *category, format).await,
            ProductsCommand::Show { id } => self.execute_show(ctx, *id, format).await,
        }
    }

    async fn execute_list(
        &self,
        ctx: &CliContext,
        category: Option<CategoryId>,
        format: OutputFormat,
    ) -> Result<()> {
        let formatter = get_formatter(format);
        let client = ctx.api_client()?;

        let products = match category {
            Some(category_id) => {
                info!(%category_id, "Listing products by category");
                client
                    .products()
                    .get_by_category(category_id)
                    .await
                    .with_context(|| format!("Failed to list products of category {category_id}"))?
            }
            None => {
                info!("Listing products");
                client
                    .products()
                    .get_all()
                    .await
                    .context("Failed to list products")?
            }
        };

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&products)?);
            return Ok(());
        }

        if products.is_empty() {
            formatter.success("No products found");
            return Ok(());
        }

        formatter.success(&format!("{} product(s)", products.len()));
        formatter.info("");
        for line in product_table(&products) {
            formatter.info(&line);
        }
        Ok(())
    }

    async fn execute_show(&self, ctx: &CliContext, id: ProductId, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);
        let client = ctx.api_client()?;

        let product = client
            .products()
            .get_by_id(id)
            .await
            .map_err(|e| lookup_error("Product", id, e))?;

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&product)?);
            return Ok(());
        }

        formatter.success(&format!("{} (#{})", product.name, product.id));
        formatter.info(&format!("Price:       {}", format_price(product.price)));
        if let Some(category_id) = product.category_id {
            formatter.info(&format!("Category:    {category_id}"));
        }
        if let Some(ref description) = product.description {
            formatter.info(&format!("Description: {description}"));
        }
        if let Some(ref image_url) = product.image_url {
            formatter.info(&format!("Image:       {image_url}"));
        }
        if let Some(created_at) = product.created_at {
            formatter.info(&format!(
                "Added:       {}",
                created_at.format("%Y-%m-%d %H:%M")
            ));
        }
        Ok(())
    }
}

/// Renders products as aligned `ID  Name  Price` rows, header first
fn product_table(products: &[Product]) -> Vec<String> {
    let mut lines = vec![
        format!("{:>6}  {:<40}  {:>10}", "ID", "Name", "Price"),
        format!("{:>6}  {:<40}  {:>10}", "------", "-".repeat(40), "----------"),
    ];
    lines.extend(products.iter().map(|p| {
        format!(
            "{:>6}  {:<40}  {:>10}",
            p.id,
            truncate(&p.name, 40),
            format_price(p.price)
        )
    }));
    lines
}
