//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `periodical_core` linkage by running one small catalog scenario.
//! - Keep output deterministic apart from generated ids, which are not printed.

use periodical_core::{
    core_version, init_logging, Author, CatalogRepository, InMemoryCatalog, LogConfig, Magazine,
    ValidationError,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("periodical_core version={}", core_version());

    if let Some(config) = LogConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=smoke_failed module=cli status=error reason={}", err.kind());
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> Result<(), ValidationError> {
    let mut catalog = InMemoryCatalog::new();
    let laura = Author::new("Laura")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;

    laura.add_article(&mut catalog, vogue, "Fashion Trends 2024")?;

    let magazine = catalog
        .magazine(vogue)
        .ok_or(ValidationError::UnknownMagazine(vogue))?;
    println!(
        "article_titles={:?}",
        magazine.article_titles(&catalog).unwrap_or_default()
    );
    println!(
        "topic_areas={:?}",
        laura.topic_areas(&catalog).unwrap_or_default()
    );
    println!(
        "top_publisher={}",
        Magazine::top_publisher(&catalog)
            .map(Magazine::name)
            .unwrap_or("none")
    );

    let bob = Author::new("Bob")?;
    match bob.add_article(&mut catalog, vogue, "Hi") {
        Err(err) => println!("rejected: {err}"),
        Ok(_) => println!("unexpectedly accepted short title"),
    }
    println!("articles={}", catalog.articles().len());
    Ok(())
}
