// dict-build/src/main.rs
#![forbid(unsafe_code)]

/*
Offline dictionary ETL.

Reads a directory of lexical-entry XML documents (NIKL-style), keeps entries
tagged as nouns, takes their written form, strips everything outside the
Hangeul syllable block, keeps results of 2+ characters, dedupes, sorts, and
emits a minified JSON string array — the format `Dictionary::from_json_path`
consumes.

The scan is regex-over-blocks rather than a streaming XML parse: files are
split on the `<LexicalEntry` opening tag and each block is tested in
isolation. Memory-hungry on very large files but assumes the standard NIKL
formatting and keeps the tool dependency-light.
*/

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;

#[derive(Parser, Debug)]
#[command(name = "dict_build")]
struct Args {
    /// Directory containing lexical-entry XML files
    #[arg(long)]
    input_dir: PathBuf,

    /// Output JSON file (string array)
    #[arg(long, default_value = "dictionary.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut files: Vec<PathBuf> = fs::read_dir(&args.input_dir)
        .with_context(|| format!("reading {}", args.input_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "xml"))
        .collect();
    files.sort();
    println!("Found {} XML files.", files.len());

    let noun_re = Regex::new(r#"<feat att="partOfSpeech" val="명사""#).unwrap();
    let form_re = Regex::new(r#"<feat att="writtenForm" val="([^"]+)""#).unwrap();

    let mut words = BTreeSet::new();
    for path in &files {
        println!("Processing {}...", path.display());
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        extract_nouns(&content, &noun_re, &form_re, &mut words);
    }

    println!("Total unique nouns extracted: {}", words.len());

    let list: Vec<&String> = words.iter().collect();
    let json = serde_json::to_string(&list)?;
    fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

/// Scan `<LexicalEntry` blocks of one document; collect the written forms of
/// noun entries, stripped to Hangeul syllables, when 2+ characters remain.
fn extract_nouns(content: &str, noun_re: &Regex, form_re: &Regex, out: &mut BTreeSet<String>) {
    // The first chunk is the file header, not an entry.
    for block in content.split("<LexicalEntry").skip(1) {
        if !noun_re.is_match(block) {
            continue;
        }
        let Some(caps) = form_re.captures(block) else {
            continue;
        };
        let word: String = caps[1]
            .chars()
            .filter(|&c| ('가'..='힣').contains(&c))
            .collect();
        if word.chars().count() >= 2 {
            out.insert(word);
        }
    }
}
