use clap::Parser;
use find_store::app::{self, report};
use find_store::domain::model::LocateRequest;
use find_store::utils::logger;
use find_store::{CliConfig, LocatorError, Result};

async fn execute(cli: &CliConfig, request: &LocateRequest) -> Result<String> {
    let config = cli.locator_config()?;
    tracing::debug!(
        "Geocoder endpoint: {}, data file: {}",
        config.endpoint,
        config.data_file.display()
    );
    app::run(request, &config).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let request = cli.request();
    tracing::debug!("Request: {:?}", request);

    let outcome = tokio::select! {
        result = execute(&cli, &request) => result,
        _ = tokio::signal::ctrl_c() => Err(LocatorError::Interrupted),
    };

    match outcome {
        Ok(output) => {
            if let Err(e) = report::write_output(&mut std::io::stdout().lock(), &output) {
                tracing::debug!("Writing report failed: {}", e);
                eprint!("{}", report::render_error(&e, request.output));
                std::process::exit(1);
            }
        }
        Err(LocatorError::Interrupted) => {
            eprintln!();
            std::process::exit(1);
        }
        Err(e) => {
            tracing::debug!("Lookup failed: {} (Category: {:?})", e, e.category());
            eprint!("{}", report::render_error(&e, request.output));
            std::process::exit(1);
        }
    }
}
