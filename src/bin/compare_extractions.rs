//! Compare two extraction results side by side.
//!
//! Reads two extraction-result JSON files (as returned by the extraction
//! backend, `data` envelope allowed), linearizes both into reading order,
//! and prints per-result summaries plus the two diff panes as HTML
//! fragments.
//!
//! Usage: compare_extractions <first.json> <second.json>

use std::env;
use std::fs;
use std::process;

use doclens::block::ExtractionResult;
use doclens::render::render_panes;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <first.json> <second.json>", args[0]);
        process::exit(1);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(first_path: &str, second_path: &str) -> doclens::Result<()> {
    let first = load_result(first_path)?;
    let second = load_result(second_path)?;

    print_summary(first_path, &first);
    print_summary(second_path, &second);

    let first_text = doclens::linearize(first.blocks());
    let second_text = doclens::linearize(second.blocks());

    let panes = render_panes(&first_text, &second_text, "diff-delete", "diff-insert");

    println!();
    println!("=== Pane 1: {} ===", first.model.as_deref().unwrap_or("?"));
    println!("{}", panes.first);
    println!();
    println!("=== Pane 2: {} ===", second.model.as_deref().unwrap_or("?"));
    println!("{}", panes.second);

    Ok(())
}

fn load_result(path: &str) -> doclens::Result<ExtractionResult> {
    let text = fs::read_to_string(path)?;
    ExtractionResult::from_json_str(&text)
}

fn print_summary(path: &str, result: &ExtractionResult) {
    println!(
        "{}: model={} pages={} blocks={} tables={} words={}",
        path,
        result.model.as_deref().unwrap_or("?"),
        result.total_pages(),
        result.metadata.total_text_blocks,
        result.metadata.total_tables,
        result.word_count()
    );
}
