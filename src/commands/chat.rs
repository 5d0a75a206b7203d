use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::load_and_extract;
use crate::answer::{CategoryAxis, QueryEngine, SourceAxis};
use crate::cli::ChatArgs;
use crate::config::QUIT_COMMANDS;
use crate::model::CasualtyRecord;

const NO_DATA_REPLY: &str = "I have no figures for that.";

pub fn run(args: ChatArgs) -> Result<()> {
    let loaded = load_and_extract(&args.input.document)?;
    let engine = QueryEngine::new()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    converse(
        &engine,
        &loaded.extraction.records,
        &args.username,
        &mut input,
        &mut output,
    )
}

/// Reads `<data> [<source>]` requests until a quit command or end of input.
pub(super) fn converse<R: BufRead, W: Write>(
    engine: &QueryEngine,
    records: &[CasualtyRecord],
    username: &str,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Chatbot ready.")?;
    info!(username, records = records.len(), "chat started");

    let mut line = String::new();
    loop {
        write!(output, "{username}> ")?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read chat input")?;
        if read == 0 || is_quit_command(&line) {
            break;
        }

        let Some((data, source)) = bind_request(&line) else {
            continue;
        };
        debug!(data = data.as_str(), source = source.as_str(), "bound request");

        let reply = engine.answer(records, data, source);
        if reply.is_empty() {
            writeln!(output, "Bot> {NO_DATA_REPLY}")?;
        } else {
            writeln!(output, "Bot> {reply}")?;
        }
    }

    writeln!(output, "Chatbot shutting down.")?;
    output.flush()?;
    Ok(())
}

pub(super) fn is_quit_command(message: &str) -> bool {
    let message = message.trim().to_lowercase();
    match message.strip_prefix(':') {
        Some(command) => QUIT_COMMANDS.contains(&command.trim()),
        None => false,
    }
}

pub(super) fn bind_request(line: &str) -> Option<(CategoryAxis, SourceAxis)> {
    let mut tokens = line.split_whitespace();
    let data = tokens.next()?;
    let source = tokens.next().unwrap_or_default();

    Some((
        CategoryAxis::from_requested(data),
        SourceAxis::from_requested(source),
    ))
}
