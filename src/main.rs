//! MentorProbe
//!
//! Main harness entry point

use tracing::{error, info};

use mentorprobe::{
    config::Settings,
    suites::SuiteRunner,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let mut settings = Settings::new()?;

    // Suite names on the command line override the configured selection
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        settings.probe.suites = args;
    }

    settings.validate()?;

    // Initialize logging; the guard keeps the rolling file writer alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!(
        base_url = %settings.api.base_url,
        "Starting MentorProbe smoke-test run"
    );

    let runner = SuiteRunner::new(settings);
    let report = runner.run().await?;

    println!("{}", report.render_summary());

    if !report.is_success() {
        error!(
            failed = report.failed(),
            total = report.total(),
            "Probe run recorded failures"
        );
        std::process::exit(1);
    }

    info!(total = report.total(), "All checks passed");
    Ok(())
}
