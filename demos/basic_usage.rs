//! Basic usage example for govdb-rs
//!
//! This example demonstrates how to:
//! - Load governorates and cities from a data source
//! - Resolve each city's governorate
//! - Spot cities whose governorate id points nowhere

use govdb_rs::prelude::*;

const GOVERNMENTS: &str = r#"[
    {"id":1,"governorate_name_ar":"القاهرة","governorate_name_en":"Cairo"},
    {"id":2,"governorate_name_ar":"الجيزة","governorate_name_en":"Giza"}
]"#;

const CITIES: &str = r#"[
    {"id":10,"city_name_ar":"مدينة نصر","city_name_en":"Nasr City","governorate_id":1},
    {"id":11,"city_name_ar":"الدقي","city_name_en":"Dokki","governorate_id":2},
    {"id":12,"city_name_ar":"؟","city_name_en":"Nowhere","governorate_id":99}
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== govdb-rs Basic Usage Example ===\n");

    // Pass a directory as the first argument to read real files instead.
    let source: Box<dyn DataSource> = match std::env::args().nth(1) {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(
            MemorySource::new()
                .with_file(GOVERNMENTS_FILE, GOVERNMENTS)
                .with_file(CITIES_FILE, CITIES),
        ),
    };

    // Example 1: List governorates
    println!("--- Example 1: Governorates ---");
    let governments: Vec<Government> = load_all(source.as_ref(), GOVERNMENTS_FILE).await?;
    println!("Total governorates: {}", governments.len());
    for (i, g) in governments.iter().take(5).enumerate() {
        println!("{}. {} / {} (#{})", i + 1, g.name_en(), g.name_ar(), g.id);
    }
    println!();

    // Example 2: Enrich cities
    println!("--- Example 2: Cities with their governorate ---");
    let cities: Vec<City> = load_all(source.as_ref(), CITIES_FILE).await?;
    let enriched = enrich(&cities, &governments);
    for city in &enriched {
        match city.government() {
            Some(g) => println!("- {} ({})", city.name_en(), g.name_en()),
            None => println!("- {} (unknown governorate #{})", city.name_en(), city.government_id),
        }
    }
    println!();

    // Example 3: Same thing, as the API would send it
    println!("--- Example 3: JSON ---");
    println!(
        "{}",
        serde_json::to_string_pretty(&enriched).unwrap_or_default()
    );

    Ok(())
}
