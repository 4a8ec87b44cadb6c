// Command line front end for the SA ID number validator

use clap::Parser;
use sa_id::{models::ValidationIssueType, IdValidator, ValidationResult};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sa-id", version, about = "Validate South African ID numbers")]
struct Args {
    /// ID numbers to validate
    #[arg(required = true)]
    ids: Vec<String>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Log each rejected check
    #[arg(short, long)]
    verbose: bool,
}

fn print_report(result: &ValidationResult) {
    println!("ID number: {}", result.id_number);

    let step = |label: &str, passed: bool| {
        println!("  {:<18} {}", label, if passed { "PASSED" } else { "FAILED" });
    };
    step("Length", result.length_valid);
    step("Digits", result.digits_valid);
    step("Date of birth", result.date_valid);
    step("Sequence", result.sequence_valid);
    step("Citizenship", result.citizenship_valid);
    step("Legacy indicator", result.legacy_indicator_valid);
    step("Checksum", result.checksum_valid);

    for issue in &result.issues {
        println!(
            "  - [{}] {}",
            match issue.issue_type {
                ValidationIssueType::Length => "LENGTH",
                ValidationIssueType::Format => "FORMAT",
                ValidationIssueType::Date => "DATE",
                ValidationIssueType::Sequence => "SEQUENCE",
                ValidationIssueType::Citizenship => "CITIZENSHIP",
                ValidationIssueType::LegacyIndicator => "LEGACY",
                ValidationIssueType::Checksum => "CHECKSUM",
            },
            issue.message
        );
    }

    println!("  Result: {}\n", if result.is_valid { "VALID" } else { "INVALID" });
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let validator = IdValidator::new();
    let results: Vec<ValidationResult> = args
        .ids
        .iter()
        .map(|id| validator.validate_detailed(id))
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error serializing report: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for result in &results {
            print_report(result);
        }
    }

    if results.iter().all(|r| r.is_valid) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
