use crossterm::style::Stylize;
use keyword_core::enrichment::EnrichmentConfig;
use keyword_core::persistence;
use keyword_core::{EnrichmentRecord, KeywordEngine, NormalizeMode};
use std::collections::HashMap;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const DEFAULT_SNAPSHOT_PATH: &str = "keyword_session.bin";

fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let snapshot_path = std::env::var("KEYWORD_SNAPSHOT_PATH")
        .unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let mut engine =
        KeywordEngine::from_snapshot_or_new(&snapshot_path, EnrichmentConfig::from_env());
    let mut mode = NormalizeMode::DelimiterSplit;
    let mut input = String::new();
    let mut status = String::new();

    loop {
        print_ui(&input, mode, &engine, &status);
        status.clear();

        let mut line = String::new();
        if stdin().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let cmd = line.trim();

        match cmd {
            "exit" => break,
            "" => {}
            ":help" => status = help_text(),
            ":clear" => input.clear(),
            ":mode split" => mode = NormalizeMode::DelimiterSplit,
            ":mode phrase" => mode = NormalizeMode::PhraseExtraction,
            ":process" => match engine.process(&input, mode) {
                Ok(keywords) => {
                    status = format!("{} keyword(s) ready.", keywords.len());
                    input.clear();
                }
                Err(e) => status = e.to_string().red().to_string(),
            },
            ":cloud" => status = render_cloud(&engine),
            s if s.starts_with(":details") => {
                status = handle_details(s[":details".len()..].trim(), &mut engine);
            }
            s if s.starts_with(":export") => {
                status = handle_export(s[":export".len()..].trim(), &engine);
            }
            s if s.starts_with(":save") => {
                status = handle_save(s[":save".len()..].trim(), &engine);
            }
            s if s.starts_with(":load") => {
                status = handle_load(s[":load".len()..].trim(), &mut engine);
            }
            s => {
                // Anything else extends the input buffer.
                if !input.is_empty() {
                    input.push(' ');
                }
                input.push_str(s);
            }
        }
    }

    println!("\nSaving session...");
    if let Err(e) = engine.save_session() {
        eprintln!("[ERROR] Could not save session: {}", e);
    } else {
        println!("Session saved to '{}'", snapshot_path);
    }
}

fn print_ui(input: &str, mode: NormalizeMode, engine: &KeywordEngine, status: &str) {
    // Basic clear screen for simplicity
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "Keyword Processor".bold());
    println!("---------------------------------------------------------------");
    let mode_name = match mode {
        NormalizeMode::DelimiterSplit => "split (comma-separated)",
        NormalizeMode::PhraseExtraction => "phrase (free text)",
    };
    println!("Mode: {}. Type text, ':process' to run, ':help' for the rest.", mode_name);

    println!("\nInput: [{}]", input);

    let keywords = engine.session.keywords();
    if keywords.is_empty() {
        println!("\nNo keywords yet.");
    } else {
        println!("\nKeywords:");
        for (i, keyword) in keywords.iter().enumerate() {
            if engine.session.details_for(keyword).is_some() {
                println!(
                    "  {}: {} {}",
                    i + 1,
                    keyword.as_str().green(),
                    "(enriched)".dark_grey()
                );
            } else {
                println!("  {}: {}", i + 1, keyword);
            }
        }
    }

    if !status.is_empty() {
        println!("\n{}", status);
    }
    print!("\n> ");
    stdout().flush().unwrap();
}

fn help_text() -> String {
    [
        "Commands:",
        "  <text>                append to the input buffer",
        "  :process              turn the input buffer into the keyword set",
        "  :mode split|phrase    comma splitting vs. phrase extraction",
        "  :details <n|keyword>  fetch synonyms/antonyms/definitions",
        "  :cloud                frequency view of all fetched terms",
        "  :export <path>        write the keyword set as a table",
        "  :save <path>          write a session snapshot",
        "  :load <path>          restore a session snapshot",
        "  :clear                drop the input buffer",
        "  exit                  save the session and quit",
    ]
    .join("\n")
}

fn handle_details(arg: &str, engine: &mut KeywordEngine) -> String {
    let keyword = match arg.parse::<usize>() {
        Ok(n) => match n.checked_sub(1).and_then(|i| engine.session.keywords().get(i)) {
            Some(k) => k.clone(),
            None => return format!("no keyword #{}", n).red().to_string(),
        },
        Err(_) if !arg.is_empty() => arg.to_string(),
        Err(_) => return "usage: :details <number|keyword>".to_string(),
    };
    match engine.fetch_details(&keyword) {
        Ok(record) => render_record(&keyword, record),
        Err(e) => e.to_string().red().to_string(),
    }
}

fn render_record(keyword: &str, record: &EnrichmentRecord) -> String {
    if record.is_empty() {
        return format!("{}: no lexical data found", keyword.bold());
    }
    let mut out = format!("{}\n", keyword.bold());
    if !record.definitions.is_empty() {
        out.push_str("  definitions:\n");
        for (i, definition) in record.definitions.iter().enumerate() {
            out.push_str(&format!("    {}. {}\n", i + 1, definition));
        }
    }
    if !record.synonyms.is_empty() {
        out.push_str(&format!(
            "  synonyms: {}\n",
            record.synonyms.join(", ").green()
        ));
    }
    if !record.antonyms.is_empty() {
        out.push_str(&format!(
            "  antonyms: {}\n",
            record.antonyms.join(", ").red()
        ));
    }
    out
}

/// Text rendition of the word-cloud idea: every synonym/antonym term across
/// the fetched records, weighted by how many records it appears in.
fn render_cloud(engine: &KeywordEngine) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in engine.session.details().values() {
        for term in record.synonyms.iter().chain(record.antonyms.iter()) {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    if counts.is_empty() {
        return "nothing to draw yet: fetch details for some keywords first".to_string();
    }

    let mut terms: Vec<(&str, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut out = String::from("Term cloud (weight = occurrences across records):\n  ");
    for (i, (term, count)) in terms.iter().enumerate() {
        let styled = match count {
            c if *c >= 3 => term.bold().red().to_string(),
            2 => term.bold().yellow().to_string(),
            _ => term.dark_grey().to_string(),
        };
        out.push_str(&styled);
        out.push(' ');
        if (i + 1) % 8 == 0 {
            out.push_str("\n  ");
        }
    }
    out
}

fn handle_export(arg: &str, engine: &KeywordEngine) -> String {
    if arg.is_empty() {
        return "usage: :export <path>".to_string();
    }
    match persistence::export_keywords(engine.session.keywords(), Path::new(arg)) {
        Ok(()) => format!(
            "exported {} keyword(s) to '{}'",
            engine.session.keywords().len(),
            arg
        ),
        Err(e) => e.to_string().red().to_string(),
    }
}

fn handle_save(arg: &str, engine: &KeywordEngine) -> String {
    if arg.is_empty() {
        return "usage: :save <path>".to_string();
    }
    match persistence::save_session(&engine.session, Path::new(arg)) {
        Ok(()) => format!("session saved to '{}'", arg),
        Err(e) => e.to_string().red().to_string(),
    }
}

fn handle_load(arg: &str, engine: &mut KeywordEngine) -> String {
    if arg.is_empty() {
        return "usage: :load <path>".to_string();
    }
    match engine.import_session(arg) {
        Ok(()) => format!(
            "restored {} keyword(s) from '{}'",
            engine.session.keywords().len(),
            arg
        ),
        Err(e) => e.to_string().red().to_string(),
    }
}
