use clap::{Parser, Subcommand, ValueEnum};
use dispatch_report::aggregate::summarize;
use dispatch_report::binary::{load_records, read_records, write_records};
use dispatch_report::record::{DispatchRecord, RECORD_SIZE};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input dispatch file (used if no subcommand)
    #[arg(global = true)]
    input: Option<PathBuf>,

    /// Output report file
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true)]
    format: Option<Format>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a dispatch file
    Info {
        /// Input dispatch file
        input: PathBuf,
    },

    /// Validate dispatch file structure
    Validate {
        /// Input dispatch file or directory
        input: PathBuf,

        /// Recursive directory validation
        #[arg(short, long)]
        recursive: bool,
    },

    /// Write a deterministic sample dispatch file
    Generate {
        /// Output dispatch file
        output: PathBuf,

        /// Number of records to generate
        #[arg(short = 'n', long, default_value_t = 50)]
        count: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Info { input }) => {
            info_command(input)?;
        }
        Some(Commands::Validate { input, recursive }) => {
            validate_command(input, *recursive)?;
        }
        Some(Commands::Generate { output, count }) => {
            generate_command(output, *count)?;
        }
        None => {
            report_command(&cli)?;
        }
    }

    Ok(())
}

fn report_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from("Datos.bin"));
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("salida.txt"));
    let format = cli.format.unwrap_or(Format::Text);

    println!("Starting dispatch report...");

    // An unreadable input degrades to an empty record set; the report still
    // gets written with its "no data" sections.
    let records = load_records(&input);
    println!("File read. Dispatch count: {}", records.len());

    let summary = summarize(&records);
    if cli.verbose {
        println!(
            "Aggregated {} dock(s) from {}",
            summary.events_by_dock.len(),
            input.display()
        );
    }

    let rendered = match format {
        Format::Text => dispatch_report::report::write_report(&records, &summary)?,
        Format::Json => dispatch_report::json::write_json(&records, &summary)?,
    };

    // No destination, no report: a write failure here exits nonzero.
    std::fs::write(&output, rendered)?;
    println!("✓ Report written to {}", output.display());

    Ok(())
}

fn info_command(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let records = read_records(&data)?;
    let summary = summarize(&records);

    println!("=== Dispatch File Information ===");
    println!("File: {}", input.display());
    println!("Size: {} bytes", data.len());
    println!("Records: {}", records.len());
    println!();

    let total_quantity: i64 = records.iter().map(|r| i64::from(r.quantity)).sum();
    println!("=== Docks ===");
    println!("Total docks: {}", summary.events_by_dock.len());
    println!("Total quantity: {}", total_quantity);
    println!();

    for (&dock, &events) in &summary.events_by_dock {
        let products = summary
            .totals_by_dock
            .get(&dock)
            .map(|p| p.len())
            .unwrap_or(0);
        println!(
            "  Dock {}: {} dispatch(es), {} product(s)",
            dock, events, products
        );
    }

    Ok(())
}

fn validate_command(input: &Path, recursive: bool) -> Result<(), Box<dyn std::error::Error>> {
    if input.is_dir() {
        if !recursive {
            return Err("Input is a directory but --recursive is not specified".into());
        }
        validate_directory(input)?;
    } else {
        validate_single_file(input)?;
    }
    Ok(())
}

fn validate_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut total = 0;
    let mut valid = 0;
    let mut invalid = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("bin") {
            total += 1;
            match validate_single_file(path) {
                Ok(_) => valid += 1,
                Err(e) => {
                    invalid += 1;
                    eprintln!("✗ {}: {}", path.display(), e);
                }
            }
        }
    }

    println!("\n=== Validation Summary ===");
    println!("Total files: {}", total);
    println!("Valid: {}", valid);
    println!("Invalid: {}", invalid);

    if invalid > 0 {
        return Err(format!("{} file(s) failed validation", invalid).into());
    }

    Ok(())
}

fn validate_single_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(path)?;
    let records = read_records(&data)?;

    if records.is_empty() {
        return Err("File has no complete records".into());
    }

    let leftover = data.len() % RECORD_SIZE;

    println!("✓ {}", path.display());
    println!("  Records: {}", records.len());
    if leftover > 0 {
        println!("  Warning: {} trailing byte(s) ignored", leftover);
    }

    Ok(())
}

fn generate_command(output: &Path, count: u32) -> Result<(), Box<dyn std::error::Error>> {
    const PRODUCTS: [&str; 5] = ["Nails", "Screws", "Bolts", "Washers", "Anchors"];
    const PROVINCES: [&str; 6] = [
        "Buenos Aires",
        "Cordoba",
        "Santa Fe",
        "Mendoza",
        "Chaco",
        "Salta",
    ];

    let mut records = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        // Skewed on purpose so the minimum-activity analysis has a clear answer
        let dock = ((i + i / 9) % 8) as i32;
        let product = PRODUCTS[(i * 3 + i / 8) % PRODUCTS.len()];
        let province = PROVINCES[(i * 5) % PROVINCES.len()];
        let quantity = ((i * 7) % 40 + 1) as i32;
        records.push(DispatchRecord::new(dock, product, province, quantity));
    }

    let data = write_records(&records)?;
    std::fs::write(output, data)?;
    println!("✓ Wrote {} sample record(s) to {}", count, output.display());

    Ok(())
}
