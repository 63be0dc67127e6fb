use colored::*;
use std::fmt::Display;
use vidcheck_core::validation::{ValidationLevel, ValidationMessage, ValidationReport};

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white();
    let line = "=".repeat(50).bright_blue();

    println!("\n{}", line);
    println!("{}", heading);
    println!("{}\n", line);
}

/// Print a section heading (smaller than main heading) with colored styling
pub fn print_section(text: &str) {
    let section = format!(" {} ", text).bold().white();
    let line = "-".repeat(40).blue();

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print a message with a specific color based on severity
pub fn print_message(message: &ValidationMessage) {
    match message.level {
        ValidationLevel::Info => println!(
            "ℹ️  {}: {}",
            message.category.bright_cyan().bold(),
            message.message
        ),
        ValidationLevel::Warning => println!(
            "⚠️  {}: {}",
            message.category.yellow().bold(),
            message.message
        ),
        ValidationLevel::Error => println!(
            "❌ {}: {}",
            message.category.bright_red().bold(),
            message.message
        ),
    }
}

/// Print a validation report with status, messages, and summary counts
pub fn print_validation_report(report: &ValidationReport) {
    let title = if report.passed {
        if report.warnings().is_empty() {
            "✅ Verification PASSED".bright_green().bold()
        } else {
            "⚠️ Verification PASSED WITH WARNINGS".yellow().bold()
        }
    } else {
        "❌ Verification FAILED".bright_red().bold()
    };

    print_heading(&title.to_string());

    // Messages in check order; a failed report ends with its first error.
    for message in &report.messages {
        print_message(message);
    }

    print_section("Summary");
    println!(
        "  {} {}",
        report.errors().len().to_string().bold().bright_red(),
        "error(s)".bright_red()
    );
    println!(
        "  {} {}",
        report.warnings().len().to_string().bold().yellow(),
        "warning(s)".yellow()
    );
    println!(
        "  {} {}",
        report.infos().len().to_string().bold().bright_cyan(),
        "info message(s)".bright_cyan()
    );
}

/// Print an error message with red styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bold().bright_red(), message);
}

/// Print a success message with green styling and a checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message);
}

/// Print a warning message with yellow styling
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message.yellow());
}
