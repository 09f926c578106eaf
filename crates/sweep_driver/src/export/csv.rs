use std::error::Error;
use std::fs::File;

use sweep_core::parser::DetailTable;

use crate::aggregate::SweepSummary;

pub(crate) fn write_summary_impl(
    summary: &SweepSummary,
    file: File,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(summary.columns())?;
    for row in summary.sorted_rows() {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn write_detail_impl(table: &DetailTable, file: File) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(&table.header)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
