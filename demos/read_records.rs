//! Basic demo: read a dispatch file
//!
//! This demo shows how to read a dispatch file and query its aggregates.

use dispatch_report::aggregate::summarize;
use dispatch_report::binary::read_records;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <dispatch.bin>", args[0]);
        eprintln!("\nExample:");
        eprintln!("  cargo run --example read_records -- Datos.bin");
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Reading dispatch file: {}", path);

    let data = fs::read(path)?;
    let records = read_records(&data)?;
    let summary = summarize(&records);

    println!("\n=== Dispatch File Statistics ===");
    println!("Records: {}", records.len());
    println!("Docks: {}", summary.events_by_dock.len());

    println!("\n=== Events per Dock ===");
    for (dock, events) in &summary.events_by_dock {
        println!("  Dock {}: {}", dock, events);
    }

    if let Some(dock) = summary.least_active_dock() {
        println!("\n=== Least Active Dock ===");
        println!("Dock {}", dock);
        match summary.top_product(dock) {
            Some(product) => println!("Top product: {}", product),
            None => println!("No top product"),
        }
    }

    println!("\n✓ Successfully read dispatch file");
    Ok(())
}
