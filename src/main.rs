use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use wer_diff::{align_weighted, render_segments, tokenize, AlignmentReport, LabeledSegment, Token, WordErrorRate};

mod pretty;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print every edit operation and enable debug logging
    #[arg(short, long)]
    debug: bool,
    /// Take TRUTH and TRANSCRIPT as literal text instead of file paths
    #[arg(short, long)]
    text: bool,
    /// Print the report and segments as JSON
    #[arg(long)]
    json: bool,
    #[arg(long, default_value_t = 1)]
    substitution_cost: usize,
    /// Reference tokens per displayed row, 0 for a single row
    #[arg(long, default_value_t = 20)]
    row_width: usize,
    /// Ground truth transcript
    truth: String,
    /// Machine transcript
    transcript: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a AlignmentReport,
    word_error_rate: WordErrorRate,
    segments: &'a [LabeledSegment<'a, Token<'a>>],
    time_taken: f64,
}

fn read_input(argument: &str, literal: bool) -> Result<String> {
    if literal {
        Ok(argument.to_string())
    } else {
        std::fs::read_to_string(argument).with_context(|| format!("failed to read {argument}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let truth = read_input(&cli.truth, cli.text)?;
    let transcript = read_input(&cli.transcript, cli.text)?;

    let started = Instant::now();
    let reference = tokenize(&truth);
    let hypothesis = tokenize(&transcript);
    let alignment = align_weighted(&reference, &hypothesis, cli.substitution_cost);
    let report = alignment.report(&reference, &hypothesis)?;
    let segments = render_segments(&reference, &hypothesis, &alignment.script)?;
    let time_taken = started.elapsed().as_secs_f64();
    info!(
        "aligned {} reference and {} hypothesis tokens in {time_taken:.3}s",
        reference.len(),
        hypothesis.len()
    );

    if cli.json {
        let output = JsonOutput {
            report: &report,
            word_error_rate: report.word_error_rate(),
            segments: &segments,
            time_taken,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if cli.debug {
        for op in alignment.script.iter() {
            println!("{:?}", op);
        }
    }
    pretty::pretty(&pretty::rows(&segments, cli.row_width));
    println!();
    println!("insertions:    {}", report.insertions);
    println!("deletions:     {}", report.deletions);
    println!("substitutions: {}", report.substitutions);
    println!("edit distance: {}", report.errors);
    println!("reference:     {} words", report.reference_length);
    println!("word error:    {}", report.word_error_rate());
    println!("time taken:    {time_taken:.3}s");
    Ok(())
}
