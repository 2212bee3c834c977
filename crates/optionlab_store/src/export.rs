//! CSV export of stored calculations.
//!
//! Two flat layouts, one row per calculation and one row per surface
//! cell:
//!
//! - inputs: `id,timestamp,spot,strike,expiry,volatility,rate,purchase_price,quantity`
//! - surface cells: `calculation_id,option_type,spot,volatility,pnl`

use std::io::Write;

use serde::Serialize;

use crate::error::StoreError;
use crate::record::CalculationRecord;

#[derive(Serialize)]
struct InputsRow<'a> {
    id: &'a str,
    timestamp: &'a str,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    purchase_price: f64,
    quantity: u32,
}

#[derive(Serialize)]
struct SurfaceRow<'a> {
    calculation_id: &'a str,
    option_type: &'a str,
    spot: f64,
    volatility: f64,
    pnl: f64,
}

/// Writes one CSV row per calculation with its scalar inputs.
///
/// # Errors
/// - `StoreError::Csv` if serialisation or the underlying write fails
pub fn write_inputs_csv<W: Write>(
    records: &[CalculationRecord],
    writer: W,
) -> Result<(), StoreError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        let id = record.id.to_string();
        let timestamp = record.timestamp.to_rfc3339();
        csv_writer.serialize(InputsRow {
            id: &id,
            timestamp: &timestamp,
            spot: record.inputs.spot,
            strike: record.inputs.strike,
            expiry: record.inputs.expiry,
            volatility: record.inputs.volatility,
            rate: record.inputs.rate,
            purchase_price: record.position.purchase_price(),
            quantity: record.position.quantity(),
        })?;
    }
    csv_writer.flush().map_err(StoreError::Io)?;
    Ok(())
}

/// Writes one CSV row per surface cell across all calculations.
///
/// Cells are emitted in the matrix order the surfaces are stored in:
/// volatility-major, spot within a row, call surface before put.
///
/// # Errors
/// - `StoreError::Csv` if serialisation or the underlying write fails
pub fn write_surface_csv<W: Write>(
    records: &[CalculationRecord],
    writer: W,
) -> Result<(), StoreError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        let id = record.id.to_string();
        for surface in record.surfaces() {
            let option_type = surface.option_type().to_string();
            for (i, &vol) in surface.vol_axis().iter().enumerate() {
                for (j, &spot) in surface.spot_axis().iter().enumerate() {
                    csv_writer.serialize(SurfaceRow {
                        calculation_id: &id,
                        option_type: &option_type,
                        spot,
                        volatility: vol,
                        pnl: surface.value(i, j),
                    })?;
                }
            }
        }
    }
    csv_writer.flush().map_err(StoreError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CalculationInputs;
    use optionlab_risk::{build_pnl_surfaces, AxisRange, Position, SurfaceSpec};

    fn sample_record(resolution: usize) -> CalculationRecord {
        let spec = SurfaceSpec::new(
            AxisRange::new(80.0, 120.0).unwrap(),
            AxisRange::new(0.10, 0.30).unwrap(),
            110.0,
            0.5,
            0.05,
        )
        .with_resolution(resolution);
        let position = Position::new(5.0, 2).unwrap();
        let surfaces = build_pnl_surfaces(&spec, &position).unwrap();
        CalculationRecord::new(
            CalculationInputs {
                spot: 100.0,
                strike: 110.0,
                expiry: 0.5,
                volatility: 0.2,
                rate: 0.05,
            },
            position,
            surfaces,
        )
    }

    #[test]
    fn test_inputs_csv_layout() {
        let record = sample_record(3);
        let mut out = Vec::new();
        write_inputs_csv(std::slice::from_ref(&record), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,timestamp,spot,strike,expiry,volatility,rate,purchase_price,quantity"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with(&record.id.to_string()));
        assert!(row.ends_with(",5.0,2"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_surface_csv_row_count() {
        let record = sample_record(4);
        let mut out = Vec::new();
        write_surface_csv(std::slice::from_ref(&record), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // Header + two 4x4 surfaces
        assert_eq!(text.lines().count(), 1 + 2 * 16);
        assert_eq!(
            text.lines().next().unwrap(),
            "calculation_id,option_type,spot,volatility,pnl"
        );
    }

    #[test]
    fn test_surface_csv_call_rows_before_put() {
        let record = sample_record(2);
        let mut out = Vec::new();
        write_surface_csv(std::slice::from_ref(&record), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let types: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(types, ["call", "call", "call", "call", "put", "put", "put", "put"]);
    }

    #[test]
    fn test_multiple_records_concatenate() {
        let records = vec![sample_record(2), sample_record(2)];
        let mut out = Vec::new();
        write_inputs_csv(&records, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }
}
