//! Demo: build a dispatch file from scratch
//!
//! Writes a handful of records and reads them back.

use dispatch_report::binary::{read_records, write_records};
use dispatch_report::record::DispatchRecord;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let records = vec![
        DispatchRecord::new(1, "Nails", "Buenos Aires", 120),
        DispatchRecord::new(1, "Screws", "Cordoba", 75),
        DispatchRecord::new(2, "Nails", "Santa Fe", 30),
        DispatchRecord::new(5, "Anchors", "Mendoza", 12),
        DispatchRecord::new(5, "Anchors", "Salta", 18),
    ];

    let data = write_records(&records)?;
    fs::write("demo_dispatch.bin", &data)?;
    println!("Wrote {} records ({} bytes) to demo_dispatch.bin", records.len(), data.len());

    // Read them back to show the round trip
    let decoded = read_records(&data)?;
    println!("\n=== Decoded Records ===");
    for record in &decoded {
        println!(
            "  Dock {}: {} x{} ({})",
            record.dock,
            record.product(),
            record.quantity,
            record.province()
        );
    }

    println!("\n✓ Done");
    Ok(())
}
