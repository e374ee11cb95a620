//! In-memory cell store.

use ratefetch_types::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{CellRef, CellStore, CellValue};

/// Cells of several sheets, keyed by sheet name and A1 address.
///
/// Serializes as `{"sheets": {"<sheet>": {"<A1>": <value>}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, BTreeMap<String, CellValue>>,
}

impl MemoryWorkbook {
    /// Creates an empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a cell.
    #[must_use]
    pub fn get(&self, cell: &CellRef) -> Option<&CellValue> {
        self.sheets.get(cell.sheet())?.get(&cell.address())
    }

    /// Returns the number of cells holding a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no cell holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the workbook as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Saves the workbook as JSON at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl CellStore for MemoryWorkbook {
    fn set(&mut self, cell: CellRef, value: CellValue) -> Result<()> {
        self.sheets
            .entry(cell.sheet().to_string())
            .or_default()
            .insert(cell.address(), value);
        Ok(())
    }
}
