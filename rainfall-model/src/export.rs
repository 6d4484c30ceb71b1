//! CSV export of a rainfall table.
//!
//! The header lists the base columns then every derived column present:
//!
//! ```text
//! Year,Rainfall,Percentage of normal,Linear regression
//! 2000,100,50,100
//! ```

use crate::RainfallTable;
use rainfall_core::error::{RainfallError, Result};
use rainfall_core::label::Label;
use rainfall_core::year_range::YearRange;

impl RainfallTable {
    /// Write the rows inside `range` as CSV text.
    pub fn to_csv(&self, range: YearRange) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        let labels = self.labels();
        wtr.write_record(labels.iter().map(Label::as_str))?;

        for (i, row) in self.rows.iter().enumerate() {
            if !range.contains(row.year) {
                continue;
            }
            let mut record = vec![row.year.to_string(), row.value.to_string()];
            for column in self.columns.values() {
                record.push(column[i].to_string());
            }
            wtr.write_record(&record)?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| RainfallError::DataFormat(e.to_string()))
    }
}
