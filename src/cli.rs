use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{about-with-newline}

{usage-heading}
  {usage}

{tab}Options:
{options}

{after-help}
";

#[derive(Parser)]
#[command(name = "header-audit")]
#[command(about = "Check internal services for HTTP security headers")]
#[command(
    long_about = "header-audit sends one GET request to each configured service and checks\n\
    the response for six security headers:\n\n\
    • X-Content-Type-Options\n\
    • X-Frame-Options\n\
    • X-XSS-Protection\n\
    • Strict-Transport-Security\n\
    • Content-Security-Policy\n\
    • Referrer-Policy\n\n\
    The findings are written as JSON. Services that cannot be reached are left out."
)]
#[command(
    help_template = HELP_TEMPLATE,
    after_help = "Examples:\n\
    \n\
    Audit the built-in service list:\n\
      $ header-audit\n\
    \n\
    Use a custom target list and show a summary:\n\
      $ header-audit --config audit.toml --summary\n\
    \n\
    Write the report somewhere else:\n\
      $ header-audit --output ./report.json"
)]
pub struct Cli {
    /// Configuration file (TOML)
    ///
    /// Overrides the built-in target list, output path, timeout and header table.
    /// Fields missing from the file keep their built-in values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report output path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a summary table after the run
    #[arg(long)]
    pub summary: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

/// Generate shell completion scripts
pub fn generate_completions(shell: &str, app: &mut clap::Command) {
    use clap_complete::{generate, shells};
    match shell {
        "zsh" => {
            generate(shells::Zsh, app, "header-audit", &mut std::io::stdout());
        }
        "fish" => {
            generate(shells::Fish, app, "header-audit", &mut std::io::stdout());
        }
        "bash" => {
            generate(shells::Bash, app, "header-audit", &mut std::io::stdout());
        }
        "powershell" => {
            generate(shells::PowerShell, app, "header-audit", &mut std::io::stdout());
        }
        _ => {
            eprintln!("Unsupported shell: {}", shell);
            eprintln!("Supported shells: zsh, fish, bash, powershell");
        }
    }
}
