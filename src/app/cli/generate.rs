//! Script generation commands.

use std::path::PathBuf;

use crate::app::api::{self, GenerateOptions, GenerateOutcome, SessionOptions};
use crate::domain::AppError;

pub fn run_generate(
    session: &SessionOptions,
    ids: Vec<String>,
    categories: Vec<String>,
    output: Option<PathBuf>,
) -> Result<i32, AppError> {
    let request = GenerateOptions { option_ids: ids, categories, output };
    report(api::generate(session, request))
}

pub fn run_select(
    session: &SessionOptions,
    ids: Vec<String>,
    output: Option<PathBuf>,
) -> Result<i32, AppError> {
    match api::select_and_generate(session, &ids, output) {
        Ok(None) => {
            println!("Selection cancelled; no script generated.");
            Ok(0)
        }
        Ok(Some(outcome)) => report(Ok(outcome)),
        Err(err) => report(Err(err)),
    }
}

fn report(result: Result<GenerateOutcome, AppError>) -> Result<i32, AppError> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(AppError::EmptySelection) => {
            eprintln!("⚠️  {}", AppError::EmptySelection);
            return Ok(1);
        }
        Err(err) => return Err(err),
    };

    match &outcome.written_to {
        Some(path) => {
            println!("✅ Script saved to {} ({} tool(s))", path.display(), outcome.included.len());
            for (i, label) in outcome.included.iter().enumerate() {
                println!("  {}. {}", i + 1, label);
            }
            println!("Run with: sudo -E {}", path.display());
        }
        None => {
            println!("{}", outcome.script);
        }
    }
    Ok(0)
}
