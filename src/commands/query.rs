use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use super::load_and_extract;
use crate::answer::QueryEngine;
use crate::cli::QueryArgs;
use crate::model::QueryResponse;
use crate::util::write_json_stdout;

pub fn run(args: QueryArgs) -> Result<()> {
    let loaded = load_and_extract(&args.input.document)?;
    let records = &loaded.extraction.records;

    let engine = QueryEngine::new()?;
    let selected = engine.select(records, args.data, args.source);
    let text = engine.render(&selected);

    if selected.is_empty() {
        warn!(
            data = args.data.as_str(),
            source = args.source.as_str(),
            "no records matched"
        );
    } else {
        info!(
            data = args.data.as_str(),
            source = args.source.as_str(),
            matched = selected.len(),
            "query answered"
        );
    }

    if args.json {
        let response = QueryResponse {
            category_axis: args.data,
            source_axis: args.source,
            matched: selected.len(),
            records: selected,
            text,
        };
        return write_json_stdout(&response, "query");
    }

    if !text.is_empty() {
        let mut output = io::BufWriter::new(io::stdout().lock());
        writeln!(output, "{text}")?;
        output.flush()?;
    }

    Ok(())
}
