use std::process::ExitCode;

use w3c_validator::{
    Cli, ConfigManager, HttpClientConfig, Reporter, ValidationError, Validator, ValidatorClient,
    ValidatorSettings, VerbosityLevel,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if cli.targets.is_empty() {
        Reporter::stderr(cli.verbosity()).report_usage(&Cli::usage());
        return ExitCode::from(1);
    }

    match run(&cli).await {
        Ok(code) => code,
        Err(error) => {
            Reporter::stderr(cli.verbosity()).report_fatal(&error);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, ValidationError> {
    let config = ConfigManager::load_config(cli).await?;
    let verbosity = VerbosityLevel::from_flags(config.output.verbose, config.output.quiet);

    let client = ValidatorClient::new(HttpClientConfig::from(&config.network))?;
    let mut validator = Validator::new(
        client,
        Reporter::stderr(verbosity),
        ValidatorSettings::from_config(&config),
    );

    let tally = validator.run_all(&cli.targets).await?;
    Ok(ExitCode::from(tally.exit_status()))
}
