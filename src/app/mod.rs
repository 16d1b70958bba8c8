pub mod report;

use crate::adapters::{BingGeocoder, CsvCatalog};
use crate::config::LocatorConfig;
use crate::core::locator::StoreLocator;
use crate::domain::model::LocateRequest;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

/// Validates the configuration, runs the lookup, and returns the rendered
/// report ready for stdout.
pub async fn run(request: &LocateRequest, config: &LocatorConfig) -> Result<String> {
    validate_non_empty_string(&request.query.kind().to_string(), request.query.text())?;
    config.validate()?;

    let locator = StoreLocator::new(
        BingGeocoder::from_config(config),
        CsvCatalog::from_config(config),
    );
    let nearest = locator.locate(&request.query, request.units).await?;

    report::render(&nearest, &request.query, request.output)
}
