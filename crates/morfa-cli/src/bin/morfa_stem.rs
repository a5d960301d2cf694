// morfa-stem: look up lemmas for words read from stdin.
//
// Reads one word per line and prints tab-separated lemmas; with --tags,
// each lemma is followed by its tag. Unknown words print a lone "-".
//
// Usage:
//   morfa-stem [-d DICT_PATH] [--tags]
//
// Options:
//   -d, --dict-path PATH   Dictionary image (.fsa with sidecar .info)
//   --tags                 Print the tag after each lemma
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = morfa_cli::parse_dict_path(&args);
    let (with_tags, args) = morfa_cli::take_flag(&args, "--tags");

    if morfa_cli::wants_help(&args) {
        println!("morfa-stem: look up lemmas for words read from stdin.");
        println!();
        println!("Usage: morfa-stem [-d DICT_PATH] [--tags]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary image (.fsa with sidecar .info)");
        println!("  --tags                 Print the tag after each lemma");
        println!("  -h, --help             Print this help");
        return;
    }

    let dictionary =
        morfa_cli::load_dictionary(dict_path.as_deref()).unwrap_or_else(|e| morfa_cli::fatal(&e));
    let mut lookup = dictionary.lookup();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let result = if with_tags {
            lookup.stem_and_form(word)
        } else {
            lookup.stem(word)
        };
        match result {
            Ok(entries) if entries.is_empty() => {
                let _ = writeln!(out, "{word}\t-");
            }
            Ok(entries) => {
                let _ = write!(out, "{word}");
                for entry in &entries {
                    let _ = write!(out, "\t{entry}");
                }
                let _ = writeln!(out);
            }
            Err(e) => {
                eprintln!("{word}: {e}");
            }
        }
    }
}
