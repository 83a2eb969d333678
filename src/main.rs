use clap::CommandFactory;
use header_audit::cli;
use header_audit::config::AuditConfig;
use header_audit::output::Output;
use header_audit::security::HeaderAuditor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Output::init();

    if let Ok(shell) = std::env::var("HEADER_AUDIT_GENERATE_COMPLETIONS") {
        let mut app = cli::Cli::command();
        cli::generate_completions(&shell, &mut app);
        return Ok(());
    }

    let opts = cli::parse();

    let mut config = AuditConfig::load(opts.config.as_deref())?;
    if let Some(output) = opts.output {
        config.output_path = output;
    }

    if opts.verbose {
        Output::info(&format!("{} target(s), timeout {}s", config.targets.len(), config.timeout_secs));
        for url in &config.targets {
            Output::list_item(url);
        }
        Output::info(&format!("Report: {}", config.output_path.display()));
    }

    let auditor = HeaderAuditor::new(config)?;
    let report = auditor.run().await;

    // Failed checks were already reported; only a failed write is fatal
    report.write_json(&auditor.config().output_path)?;

    if opts.summary {
        Output::report_summary(&report);
    }

    Output::success("Security headers check completed");

    Ok(())
}
