use clap::Parser;
use datemark::domain::model::{format_stamp, parse_stamp};
use datemark::utils::{logger, validation::Validate};
use datemark::{CliConfig, ProductCatalog, ShelfLifeSource, StampEngine, StampError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting datemark");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match ProductCatalog::from_path(&config.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog {}: {}", config.catalog, e);
            eprintln!("❌ failed to load catalog {}: {}", config.catalog, e);
            std::process::exit(1);
        }
    };
    tracing::info!("📋 Catalog loaded: {} products", catalog.len());

    let engine = StampEngine::new(catalog);

    if config.list {
        for name in engine.source().product_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(fragment) = &config.search {
        let matches = engine.matching_products(fragment);
        if matches.is_empty() {
            println!("No products match {:?}", fragment);
        } else {
            for name in matches {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    let Some(product) = &config.product else {
        eprintln!("❌ --product is required (or use --list / --search)");
        std::process::exit(1);
    };

    let manufactured = match &config.date {
        Some(value) => match parse_stamp(value) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::error!("❌ Bad manufacturing date: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    match engine.run(product, manufactured) {
        Ok(report) => {
            tracing::info!("✅ Target stamp computed: {}", format_stamp(report.target));
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report.to_json())?);
            } else {
                println!("✅ Target date: {}", format_stamp(report.target));
                println!("Product: {}", report.product);
                println!("Manufactured: {}", format_stamp(report.manufactured));
                println!("Shelf life: {}", report.shelf_life);
            }
        }
        Err(e) => {
            tracing::error!("❌ Calculation failed: {}", e);
            eprintln!("❌ {}", e);

            if let StampError::UnknownProduct { name } = &e {
                let suggestions = engine.matching_products(name);
                if !suggestions.is_empty() {
                    eprintln!("💡 Did you mean:");
                    for name in suggestions {
                        eprintln!("   {}", name);
                    }
                }
            }

            if e.is_catalog_defect() {
                eprintln!("💡 This is a catalog data problem; fix the shelf-life entry.");
                std::process::exit(2);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
