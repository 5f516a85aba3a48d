//! Categories command - Browse product categories

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use shopcart_core::domain::CategoryId;

use super::lookup_error;
use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

/// Categories subcommands
#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List categories
    List,
    /// Show one category
    Show {
        /// Category ID
        id: CategoryId,
    },
}

impl CategoriesCommand {
    /// Execute the categories command
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);
        let client = ctx.api_client()?;

        match self {
            CategoriesCommand::List => {
                info!("Listing categories");
                let categories = client
                    .categories()
                    .get_all()
                    .await
                    .context("Failed to list categories")?;

                if format.is_json() {
                    formatter.print_json(&serde_json::to_value(&categories)?);
                    return Ok(());
                }

                formatter.success(&format!("{} categor(y/ies)", categories.len()));
                for category in &categories {
                    match category.slug {
                        Some(ref slug) => {
                            formatter.info(&format!("{:>6}  {} ({})", category.id, category.name, slug))
                        }
                        None => formatter.info(&format!("{:>6}  {}", category.id, category.name)),
                    }
                }
            }
            CategoriesCommand::Show { id } => {
                let category = client
                    .categories()
                    .get_by_id(*id)
                    .await
                    .map_err(|e| lookup_error("Category", id, e))?;

                if format.is_json() {
                    formatter.print_json(&serde_json::to_value(&category)?);
                    return Ok(());
                }

                formatter.success(&format!("{} (#{})", category.name, category.id));
                if let Some(ref slug) = category.slug {
                    formatter.info(&format!("Slug:        {slug}"));
                }
                if let Some(ref description) = category.description {
                    formatter.info(&format!("Description: {description}"));
                }
            }
        }
        Ok(())
    }
}
