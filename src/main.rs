use std::env;
use std::fs;
use std::process;

use log::debug;

use cookbook_extract::{CookbookParser, ExtractError, PipelineConfig};

fn main() -> Result<(), ExtractError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: cookbook-extract <corpus-file>");
        process::exit(2);
    };

    let config = PipelineConfig::load()?;
    let corpus = fs::read_to_string(path)?;

    // Scanned books carry front matter and an index the pipeline should never
    // see; the configured line slice cuts them away.
    let corpus = match config.line_range {
        Some([start, end]) => corpus
            .lines()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect::<Vec<_>>()
            .join("\n"),
        None => corpus,
    };

    let index = CookbookParser::with_config(config).parse(&corpus);
    debug!("parsed {} recipes", index.len());

    println!("{}", serde_json::to_string_pretty(index.recipes())?);

    Ok(())
}
