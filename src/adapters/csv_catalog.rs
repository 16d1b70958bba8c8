use crate::domain::model::StoreRecord;
use crate::domain::ports::{ConfigProvider, StoreCatalog};
use crate::utils::error::{LocatorError, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "store-locations.csv";

/// Store catalog read from a CSV file with a header row.
///
/// The file is read in full on every `load` and closed before returning.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.data_file())
    }

    fn column_index(&self, headers: &csv::StringRecord, column: &str) -> Result<usize> {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}').trim() == column)
            .ok_or_else(|| LocatorError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            })
    }
}

impl StoreCatalog for CsvCatalog {
    fn load(&self) -> Result<Vec<StoreRecord>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LocatorError::CatalogNotFound {
                path: self.path.clone(),
            },
            _ => LocatorError::IoError(e),
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LocatorError::EmptyCatalog {
                source_name: self.source_name(),
            });
        }

        let mut index = [0usize; 8];
        for (slot, column) in index.iter_mut().zip(StoreRecord::REQUIRED_COLUMNS) {
            *slot = self.column_index(&headers, column)?;
        }
        let [name, location, address, city, state, zip_code, latitude, longitude] = index;
        let header_names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut stores = Vec::new();
        for row in reader.records() {
            let row = row?;
            let cell = |i: usize| row.get(i).unwrap_or_default().to_string();

            stores.push(StoreRecord {
                name: cell(name),
                location: cell(location),
                address: cell(address),
                city: cell(city),
                state: cell(state),
                zip_code: cell(zip_code),
                latitude: cell(latitude),
                longitude: cell(longitude),
                columns: header_names
                    .iter()
                    .cloned()
                    .zip(row.iter().map(str::to_string))
                    .collect(),
            });
        }

        if stores.is_empty() {
            return Err(LocatorError::EmptyCatalog {
                source_name: self.source_name(),
            });
        }

        tracing::debug!("Read {} stores from {}", stores.len(), self.path.display());
        Ok(stores)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str =
        "Store Name,Store Location,Address,City,State,Zip Code,Latitude,Longitude,County";

    fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_DATA_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order_and_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            &format!(
                "{HEADER}\n\
                 Morrisville,SWC NC Hwy 54 & Cary Parkway,3001 Market Center Dr,Morrisville,NC,27560,35.8052198,-78.8154332,Wake County\n\
                 Rosslyn,Clarendon Blvd & Wilson Blvd,1201 Wilson Blvd,Arlington,VA,22209,38.8948,-77.0716,Arlington County\n"
            ),
        );

        let stores = CsvCatalog::new(&path).load().unwrap();

        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "Morrisville");
        assert_eq!(stores[0].location, "SWC NC Hwy 54 & Cary Parkway");
        assert_eq!(stores[0].zip_code, "27560");
        assert_eq!(stores[1].name, "Rosslyn");
        assert_eq!(
            stores[0].columns.last(),
            Some(&("County".to_string(), "Wake County".to_string()))
        );
        let headers: Vec<&str> = stores[1].columns.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(headers.join(","), HEADER);
    }

    #[test]
    fn test_columns_may_appear_in_any_order() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "Latitude,Longitude,Zip Code,State,City,Address,Store Location,Store Name\n\
             1.5,2.5,00001,ST,Town,1 Main St,Corner,Only\n",
        );

        let stores = CsvCatalog::new(&path).load().unwrap();
        assert_eq!(stores[0].name, "Only");
        assert_eq!(stores[0].latitude, "1.5");
        assert_eq!(stores[0].longitude, "2.5");
    }

    #[test]
    fn test_missing_file_is_catalog_not_found() {
        let dir = TempDir::new().unwrap();
        let err = CsvCatalog::new(dir.path().join(DEFAULT_DATA_FILE))
            .load()
            .unwrap_err();

        assert!(matches!(err, LocatorError::CatalogNotFound { .. }));
        assert!(err.to_string().contains(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_header_only_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &format!("{HEADER}\n"));

        let err = CsvCatalog::new(&path).load().unwrap_err();
        assert!(matches!(err, LocatorError::EmptyCatalog { .. }));
        assert!(err.to_string().contains(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_zero_byte_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "");

        let err = CsvCatalog::new(&path).load().unwrap_err();
        assert!(matches!(err, LocatorError::EmptyCatalog { .. }));
    }

    #[test]
    fn test_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "Store Name,Latitude\nX,1.0\n");

        match CsvCatalog::new(&path).load() {
            Err(LocatorError::MissingColumn { column, .. }) => {
                assert_eq!(column, "Store Location")
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }
}
