use log::info;

use vidcheck_core::config::{CheckConfig, TruncationPolicy};
use vidcheck_core::error::Result;
use vidcheck_core::operation::Operation;
use vidcheck_core::validation;

use crate::cli::VerifyArgs;
use crate::output::{
    print_heading, print_info, print_section, print_success, print_validation_report,
};

/// Execute the verify command. Returns whether verification passed.
pub fn execute_verify(args: VerifyArgs) -> Result<bool> {
    print_heading("Transform Verification");
    print_info("Input file", args.input_path.display());
    print_info("Output file", args.output_path.display());

    // Parse the operation before touching either file; an unknown tag must
    // be reported without any decoding work.
    let operation = Operation::parse(&args.operation, &args.params)?;
    print_info("Operation", &operation);

    let config = if args.lenient_truncation {
        CheckConfig::with_truncation(TruncationPolicy::Lenient)
    } else {
        CheckConfig::default()
    };

    print_section("Verification Results");
    info!("Running transform verification");
    let report = validation::verify_transform_with(
        &args.input_path,
        &args.output_path,
        &operation,
        &config,
    )?;

    print_validation_report(&report);

    if report.passed {
        print_success(&format!("{} verified", operation));
    }

    Ok(report.passed)
}
