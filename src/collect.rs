use log::debug;
use std::io::{BufRead, Write};

/// Entering this (in any letter case, with surrounding whitespace allowed)
/// ends name collection without being recorded.
pub const TERMINATOR: &str = "done";

const PROMPT: &str = "ป้อนชื่อ: ";

/// Reads names from `input` one line at a time, writing the entry prompt to
/// `prompt_sink` before each read, until the terminator is entered or the
/// stream ends.
///
/// Lines are recorded trimmed; blank lines are skipped without ending
/// collection. End of stream (or a read error) ends collection the same
/// way the terminator does, keeping whatever was gathered so far.
/// Prompt-sink failures are ignored; this function cannot fail.
pub fn collect_names<R: BufRead, W: Write>(mut input: R, mut prompt_sink: W) -> Vec<String> {
    let mut names = Vec::new();
    let mut line = String::new();

    loop {
        write!(prompt_sink, "{}", PROMPT).ok();
        prompt_sink.flush().ok();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let name = line.trim();
        if name.eq_ignore_ascii_case(TERMINATOR) {
            break;
        }
        if !name.is_empty() {
            debug!("collected name: {:?}", name);
            names.push(name.to_string());
        }
    }

    names
}
