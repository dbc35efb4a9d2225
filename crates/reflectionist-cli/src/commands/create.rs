//! Create command implementation.

use super::open_journal;
use reflectionist_journal::Status;
use std::io::{self, BufRead, Write};
use std::path::Path;

const HAPPENED_PROMPT: &str = "What happened that affected me?";
const FELT_PROMPT: &str = "How did I feel then and now?";
const LEARNED_PROMPT: &str = "What did I learn about myself?";

pub fn run(
    config_path: &Path,
    happened: Option<String>,
    felt: Option<String>,
    learned: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal(config_path)?;

    // Prompt only for what was not passed as a flag, in field order
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let happened = answer_or_prompt(happened, HAPPENED_PROMPT, &mut input)?;
    let felt = answer_or_prompt(felt, FELT_PROMPT, &mut input)?;
    let learned = answer_or_prompt(learned, LEARNED_PROMPT, &mut input)?;

    let added = journal.add(happened, felt, learned);
    if added.status != Status::Success {
        return Err(format!("Creating a reflection failed with \"{}\"", added.status).into());
    }

    println!("Reflection added!");
    Ok(())
}

fn answer_or_prompt<R: BufRead>(
    answer: Option<String>,
    question: &str,
    input: &mut R,
) -> Result<String, Box<dyn std::error::Error>> {
    match answer {
        Some(answer) => Ok(answer),
        None => prompt(question, input),
    }
}

fn prompt<R: BufRead>(question: &str, input: &mut R) -> Result<String, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}: ", question)?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(format!("No answer given for \"{}\"", question).into());
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
