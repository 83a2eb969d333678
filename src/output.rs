use crate::security::report::AuditReport;
use atty::Stream;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Formatted terminal output for header-audit
pub struct Output;

impl Output {
    /// Check if colors should be enabled
    pub(crate) fn colors_enabled() -> bool {
        atty::is(Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Initialize output system (call at startup)
    pub fn init() {
        if !Self::colors_enabled() {
            colored::control::set_override(false);
        }
    }

    /// Show a success message
    pub fn success(msg: &str) {
        println!("{}", msg.green());
    }

    /// Show a warning message
    pub fn warning(msg: &str) {
        if Self::colors_enabled() {
            println!("{} {}", "⚠".yellow().bold(), msg.yellow());
        } else {
            println!("⚠ {}", msg);
        }
    }

    /// Show an info message
    pub fn info(msg: &str) {
        if Self::colors_enabled() {
            println!("{} {}", "ℹ".cyan().bold(), msg.cyan());
        } else {
            println!("ℹ {}", msg);
        }
    }

    /// Show a heading
    pub fn heading(msg: &str) {
        if Self::colors_enabled() {
            println!("\n{}", msg.bold().bright_blue());
        } else {
            println!("\n{}", msg);
        }
    }

    /// Show a list item
    pub fn list_item(item: &str) {
        if Self::colors_enabled() {
            println!("  {} {}", "•".cyan(), item);
        } else {
            println!("  • {}", item);
        }
    }

    pub(crate) fn progress_line(url: &str) -> String {
        format!("Checking security headers for {}", url)
    }

    pub(crate) fn check_failed_line(url: &str, err: &str) -> String {
        format!("Error checking {}: {}", url, err)
    }

    /// Per-URL progress line
    pub fn progress(url: &str) {
        println!("{}", Self::progress_line(url).bold());
    }

    /// A failed check goes to stdout alongside the progress lines
    pub fn check_failed(url: &str, err: &str) {
        println!("{}", Self::check_failed_line(url, err).red());
    }

    /// Create a table for displaying data
    pub fn table() -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        // Make table responsive to terminal width
        if let Some((_width, _)) = term_size::dimensions() {
            table.set_content_arrangement(ContentArrangement::Dynamic);
        }
        table
    }

    fn flag_cell(flag: bool) -> Cell {
        let cell = Cell::new(if flag { "yes" } else { "no" });
        if !Self::colors_enabled() {
            return cell;
        }
        if flag {
            cell.fg(comfy_table::Color::Green)
        } else {
            cell.fg(comfy_table::Color::Red)
        }
    }

    /// Show the findings of a run as a table
    pub fn report_summary(report: &AuditReport) {
        Self::heading("Security Header Summary");

        if report.is_empty() {
            Self::warning("No service answered");
        } else {
            let mut table = Self::table();
            table.set_header(vec!["Service", "Header", "Present", "Secure", "Value"]);

            for (url, service) in report.services() {
                for (name, result) in service.iter() {
                    table.add_row(vec![
                        Cell::new(url),
                        Cell::new(name),
                        Self::flag_cell(result.present),
                        Self::flag_cell(result.secure),
                        Cell::new(result.value.as_deref().unwrap_or("-")),
                    ]);
                }
            }
            println!("{}", table);

            for (url, service) in report.services() {
                let msg = format!("{}: {}/{} headers secure", url, service.secure_count(), service.len());
                if service.secure_count() == service.len() {
                    Self::success(&msg);
                } else {
                    Self::warning(&msg);
                }
            }
        }

        if !report.unreachable().is_empty() {
            Self::warning(&format!("{} service(s) could not be checked:", report.unreachable().len()));
            for url in report.unreachable() {
                Self::list_item(url);
            }
        }
    }
}
