use crate::domain::model::{NearestStore, OutputFormat, Query};
use crate::utils::error::{LocatorError, Result};
use serde_json::{Map, Value};
use std::io::Write;

pub fn render(result: &NearestStore, query: &Query, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, query)),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_text(result: &NearestStore, query: &Query) -> String {
    let store = &result.store;
    format!(
        "The nearest store to {query} is the {name} store, located at {location}.\n\
         It's {distance:.1} {units} away.\n\
         Address: {address}\n         {city}, {state} {zip}\n",
        query = query,
        name = store.name,
        location = store.location,
        distance = result.distance,
        units = result.units,
        address = store.address,
        city = store.city,
        state = store.state,
        zip = store.zip_code,
    )
}

/// Every catalog column in file order, then `Distance`. No trailing newline.
pub fn render_json(result: &NearestStore) -> Result<String> {
    let mut object = Map::new();
    for (header, value) in &result.store.columns {
        object.insert(header.clone(), Value::String(value.clone()));
    }
    object.insert(
        "Distance".to_string(),
        Value::String(format!("{:.4} {}", result.distance, result.units)),
    );

    Ok(serde_json::to_string(&Value::Object(object))?)
}

/// `{"error": "<message>"}` with a space after the colon, no trailing newline.
pub fn render_error(error: &LocatorError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {}\n", error),
        OutputFormat::Json => format!(
            "{{\"error\": {}}}",
            Value::String(error.to_string())
        ),
    }
}

/// Writes the report and flushes. A failed write is an error, not a silent
/// success.
pub fn write_output<W: Write>(out: &mut W, output: &str) -> Result<()> {
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{QueryKind, StoreRecord, Units};

    fn morrisville(distance: f64, units: Units) -> NearestStore {
        let mut store = StoreRecord::from_fields(
            "Morrisville",
            "SWC NC Hwy 54 & Cary Parkway",
            "3001 Market Center Dr",
            "Morrisville",
            "NC",
            "27560",
            "35.8052198",
            "-78.8154332",
        );
        store
            .columns
            .push(("County".to_string(), "Wake County".to_string()));
        NearestStore {
            store,
            distance,
            units,
        }
    }

    #[test]
    fn test_text_report() {
        let text = render_text(
            &morrisville(1.96138, Units::Miles),
            &Query::ZipCode("27513".to_string()),
        );

        assert_eq!(
            text,
            "The nearest store to 27513 is the Morrisville store, located at SWC NC Hwy 54 & Cary Parkway.\n\
             It's 2.0 mi away.\n\
             Address: 3001 Market Center Dr\n\
             \x20        Morrisville, NC 27560\n"
        );
    }

    #[test]
    fn test_json_report_has_all_columns_and_distance() {
        let json = render_json(&morrisville(3.156349, Units::Kilometers)).unwrap();
        assert!(!json.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Store Name"], "Morrisville");
        assert_eq!(value["Zip Code"], "27560");
        assert_eq!(value["Latitude"], "35.8052198");
        assert_eq!(value["County"], "Wake County");
        assert_eq!(value["Distance"], "3.1563 km");
        assert!(value.get("error").is_none());

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("Store Name"));
        assert_eq!(keys.last().map(|k| k.as_str()), Some("Distance"));
    }

    #[test]
    fn test_error_rendering() {
        let err = LocatorError::LocationNotFound {
            kind: QueryKind::Address,
        };

        assert_eq!(
            render_error(&err, OutputFormat::Text),
            "Error: Could not locate that address on a map. You may wish to verify that it is correct.\n"
        );

        let json = render_error(&err, OutputFormat::Json);
        assert_eq!(
            json,
            "{\"error\": \"Could not locate that address on a map. You may wish to verify that it is correct.\"}"
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["error"],
            "Could not locate that address on a map. You may wish to verify that it is correct."
        );
    }

    #[test]
    fn test_json_error_escapes_message() {
        let err = LocatorError::ConfigError {
            message: "bad \"quote\"".to_string(),
        };
        let json = render_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "Configuration error: bad \"quote\"");
    }

    struct FullDevice;

    impl Write for FullDevice {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "No space left on device",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_output_reports_failed_write() {
        let err = write_output(&mut FullDevice, "report").unwrap_err();
        assert!(matches!(err, LocatorError::IoError(_)));
    }

    #[test]
    fn test_write_output_writes_everything() {
        let mut buffer = Vec::new();
        write_output(&mut buffer, "report").unwrap();
        assert_eq!(buffer, b"report");
    }
}
