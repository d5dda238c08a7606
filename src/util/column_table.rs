use crate::StrError;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Holds named numeric columns parsed from a comma-separated text table
///
/// The first line of the file holds the column names; every subsequent line
/// holds one numeric field per column. A line with fewer fields than the
/// header signals the end of the valid data (this is how the simulation
/// export terminates a line sample) and stops the parsing without error.
pub struct ColumnTable {
    data: HashMap<String, Vec<f64>>,
}

impl ColumnTable {
    /// Reads a delimited text file into named columns
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    /// * `column_keys` -- the column names to extract; `None` extracts all
    ///   columns found in the header. Names are matched case-insensitively.
    pub fn read<P>(full_path: &P, column_keys: Option<&[&str]>) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let mut lines = BufReader::new(file).lines();

        // header
        let header_line = match lines.next() {
            Some(line) => line.map_err(|_| "cannot read header line")?,
            None => return Err("file is empty"),
        };
        let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_lowercase()).collect();

        // working set of column names
        let wanted: Vec<String> = match column_keys {
            Some(keys) => keys.iter().map(|key| key.to_lowercase()).collect(),
            None => headers.clone(),
        };

        // map each wanted name found in the header to its column index;
        // a wanted name absent from the header gets no entry and will
        // only fail later, upon access
        let mut index = HashMap::new();
        let mut data = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            if wanted.contains(header) {
                index.insert(header.clone(), i);
                data.insert(header.clone(), Vec::new());
            }
        }

        // data lines
        for line in lines {
            let line = line.map_err(|_| "cannot read data line")?;
            let row: Vec<&str> = line.split(',').collect();
            if row.len() < headers.len() {
                break; // finished reading all data
            }
            for (key, i) in &index {
                let value = row[*i].trim().parse::<f64>().map_err(|_| "cannot parse numeric field")?;
                data.get_mut(key).unwrap().push(value);
            }
        }
        Ok(ColumnTable { data })
    }

    /// Returns the column with the given name (case-insensitive)
    pub fn get(&self, column_key: &str) -> Result<&Vec<f64>, StrError> {
        self.data.get(&column_key.to_lowercase()).ok_or("column not found")
    }

    /// Returns the sorted names of the parsed columns
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.data.keys().map(|key| key.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
