//! packages handler

use anyhow::Result;

use vendorpub::application::{AssetPublisher, ConfigPublisher};
use vendorpub::infrastructure::LocalFs;
use vendorpub::presentation::factory::{
    create_asset_publisher, create_config_publisher, create_engine,
};
use vendorpub::presentation::OutputFormat;

use super::CommandContext;

/// One installed package and the sub-trees it can publish
#[derive(Debug, Clone, PartialEq, Eq)]
struct PackageRow {
    name: String,
    path: String,
    assets: bool,
    config: bool,
}

/// List packages found under the vendor directory
pub fn cmd_packages(ctx: &CommandContext) -> Result<bool> {
    let engine = create_engine(ctx.settings.options);
    let assets = create_asset_publisher(&ctx.settings, std::sync::Arc::clone(&engine));
    let configs = create_config_publisher(&ctx.settings, engine);

    let rows = collect_rows(&assets, &configs);

    match ctx.format {
        OutputFormat::Json => {
            for row in &rows {
                println!(
                    "{}",
                    serde_json::json!({
                        "event": "package",
                        "package": row.name,
                        "path": row.path,
                        "assets": row.assets,
                        "config": row.config,
                    })
                );
            }
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!(
                    "No packages found in {}",
                    ctx.settings.vendor_dir.display()
                );
            }
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for row in &rows {
                let mut publishes = Vec::new();
                if row.assets {
                    publishes.push("assets");
                }
                if row.config {
                    publishes.push("config");
                }
                let publishes = if publishes.is_empty() {
                    "-".to_string()
                } else {
                    publishes.join(", ")
                };
                if ctx.verbose > 0 {
                    println!("{:width$}  {}  {}", row.name, publishes, row.path);
                } else {
                    println!("{:width$}  {}", row.name, publishes);
                }
            }
        }
    }

    Ok(true)
}

fn collect_rows(
    assets: &AssetPublisher<LocalFs>,
    configs: &ConfigPublisher<LocalFs>,
) -> Vec<PackageRow> {
    assets
        .packages()
        .into_iter()
        .map(|package| PackageRow {
            assets: assets.publisher().source_for(&package).is_some(),
            config: configs.publisher().source_for(&package).is_some(),
            name: package.name.to_string(),
            path: package.path.display().to_string(),
        })
        .collect()
}
