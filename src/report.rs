use crate::aggregate::DispatchSummary;
use crate::record::DispatchRecord;
use std::fmt::Write;

/// Render the summary report: the per-dock breakdown followed by the
/// minimum-activity dock analysis.
pub fn write_report(
    records: &[DispatchRecord],
    summary: &DispatchSummary,
) -> Result<String, std::fmt::Error> {
    let mut writer = ReportWriter::new();
    writer.write_breakdown(summary)?;
    writer.write_least_active(records, summary)?;
    Ok(writer.buffer)
}

struct ReportWriter {
    buffer: String,
}

impl ReportWriter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write_raw(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_breakdown(&mut self, summary: &DispatchSummary) -> Result<(), std::fmt::Error> {
        for (&dock, products) in &summary.totals_by_dock {
            let events = summary.events_by_dock.get(&dock).copied().unwrap_or(0);
            writeln!(self.buffer, "Dock {} - Dispatches: {}", dock, events)?;
            for (name, quantity) in products {
                writeln!(self.buffer, "  Product: {}, Total Quantity: {}", name, quantity)?;
            }
            self.write_raw("\n");
        }
        Ok(())
    }

    fn write_least_active(
        &mut self,
        records: &[DispatchRecord],
        summary: &DispatchSummary,
    ) -> Result<(), std::fmt::Error> {
        let dock = match summary.least_active_dock() {
            Some(dock) => dock,
            None => {
                self.write_raw("Dock with fewest dispatches: none (no data)\n");
                return Ok(());
            }
        };
        writeln!(self.buffer, "Dock with fewest dispatches: {}", dock)?;

        let has_products = summary
            .totals_by_dock
            .get(&dock)
            .is_some_and(|products| !products.is_empty());
        if !has_products {
            writeln!(self.buffer, "Dock {} has no dispatched products.", dock)?;
            return Ok(());
        }

        let product = match summary.top_product(dock) {
            Some(product) => product,
            None => {
                // Every total at this dock is zero or negative
                writeln!(self.buffer, "Dock {} has no top product.", dock)?;
                return Ok(());
            }
        };
        writeln!(self.buffer, "Top product for dock {}: {}", dock, product)?;

        writeln!(self.buffer, "Dispatch detail for dock {}, product {}:", dock, product)?;
        for record in records {
            if record.dock == dock && record.product() == product {
                writeln!(
                    self.buffer,
                    "  Province: {}, Quantity: {}",
                    record.province(),
                    record.quantity
                )?;
            }
        }
        Ok(())
    }
}
