//! CSV reading and writing of expense records
//!
//! The same shape serves the plaintext store and the download action:
//! header `Name,Amount,Category,Date`, one record per row, amounts with two
//! decimal places.

use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{Reader, StringRecord, Writer};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};

/// Column headers, in file order
pub const HEADERS: [&str; 4] = ["Name", "Amount", "Category", "Date"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write records as CSV, header first
pub fn write_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> ExpenseResult<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(HEADERS)?;

    for record in records {
        let amount = record.amount.to_string();
        let date = record.date.format(DATE_FORMAT).to_string();
        csv.write_record([
            record.name.as_str(),
            amount.as_str(),
            record.category.name(),
            date.as_str(),
        ])?;
    }

    csv.flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

/// Render records to an in-memory CSV string
pub fn expenses_to_csv_string(records: &[ExpenseRecord]) -> ExpenseResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read records from CSV with a `Name,Amount,Category,Date` header
///
/// Columns are located by header name, so column order does not matter.
/// Rows are returned in file order.
pub fn read_expenses_csv<R: Read>(reader: R) -> ExpenseResult<Vec<ExpenseRecord>> {
    let mut csv = Reader::from_reader(reader);
    let headers = csv.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row, result) in csv.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = row + 2;
        records.push(columns.parse_row(&record, line)?);
    }

    Ok(records)
}

struct ColumnIndex {
    name: usize,
    amount: usize,
    category: usize,
    date: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> ExpenseResult<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| ExpenseError::Csv(format!("Missing '{}' column", wanted)))
        };

        Ok(Self {
            name: find("Name")?,
            amount: find("Amount")?,
            category: find("Category")?,
            date: find("Date")?,
        })
    }

    fn parse_row(&self, record: &StringRecord, line: usize) -> ExpenseResult<ExpenseRecord> {
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let amount = Money::parse(field(self.amount))
            .map_err(|e| ExpenseError::Csv(format!("Line {}: {}", line, e)))?;

        let category: Category = field(self.category)
            .parse()
            .map_err(|e| ExpenseError::Csv(format!("Line {}: {}", line, e)))?;

        let date = NaiveDate::parse_from_str(field(self.date), DATE_FORMAT).map_err(|e| {
            ExpenseError::Csv(format!(
                "Line {}: invalid date '{}': {}",
                line,
                field(self.date),
                e
            ))
        })?;

        Ok(ExpenseRecord::new(
            record.get(self.name).unwrap_or(""),
            amount,
            category,
            date,
        ))
    }
}
