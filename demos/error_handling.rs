//! Error handling example for govdb-rs
//!
//! This example demonstrates the loader's failure modes and the one case
//! that is *not* a failure: a city pointing at an unknown governorate.

use govdb_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== govdb-rs Error Handling Example ===\n");

    let source = MemorySource::new()
        .with_file(GOVERNMENTS_FILE, "[]")
        .with_file("broken.json", r#"[{"id": "not a number"}]"#)
        .with_file(
            CITIES_FILE,
            r#"[{"id":1,"city_name_ar":"a","city_name_en":"Lost","governorate_id":42}]"#,
        );

    // Example 1: Missing file
    println!("--- Example 1: Missing file ---");
    match load_all::<Government, _>(&source, "missing.json").await {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e @ GovError::MissingFile { .. }) => println!("✓ {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    match load_all::<Government, _>(&source, "broken.json").await {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e @ GovError::MalformedJson { .. }) => println!("✓ {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Dangling reference is a normal result
    println!("--- Example 3: Dangling governorate id ---");
    let cities: Vec<City> = load_all(&source, CITIES_FILE).await?;
    let governments: Vec<Government> = load_all(&source, GOVERNMENTS_FILE).await?;
    for city in enrich(&cities, &governments) {
        println!(
            "  {} -> governorate #{}: {:?}",
            city.name_en(),
            city.government_id,
            city.government().map(|g| g.name_en())
        );
    }

    Ok(())
}
