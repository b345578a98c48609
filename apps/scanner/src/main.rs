//! Thin command-line caller: reads a resume file and a job-description file,
//! runs one scan, and prints the report as JSON. All user-facing messaging
//! for error conditions lives here, not in the library.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scanner::{corpus, scan, validate_job_text, Config, ScanError};

fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(resume_path), Some(job_path), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: scanner <resume.txt> <job_description.txt>");
        return Ok(ExitCode::from(2));
    };

    info!("scanner v{}", env!("CARGO_PKG_VERSION"));
    let corpus = corpus::corpus();
    info!(
        terms = corpus.lexicon().len(),
        stopwords = corpus.stopword_count(),
        "corpus loaded"
    );

    let resume_text = std::fs::read_to_string(&resume_path)
        .with_context(|| format!("failed to read resume file '{resume_path}'"))?;
    let job_text = std::fs::read_to_string(&job_path)
        .with_context(|| format!("failed to read job description file '{job_path}'"))?;

    if validate_job_text(&job_text).is_err() {
        eprintln!("Scan failed, job description does not contain enough words.");
        return Ok(ExitCode::FAILURE);
    }

    match scan(&resume_text, &job_text) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(ScanError::EmptyVocabulary) => {
            eprintln!("Scan failed, no key words detected in the job description.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
