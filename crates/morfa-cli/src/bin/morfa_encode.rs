// morfa-encode: turn training triples into dictionary-compiler records.
//
// Reads tab-separated "form lemma tag" triples from stdin and writes one
// encoded record per line. The input is treated as UTF-8 and the records
// count UTF-8 bytes, matching dictionaries compiled with a UTF-8 info
// file.
//
// Usage:
//   morfa-encode [--scheme standard|prefix|infix] [--separator CHAR]
//
// Options:
//   --scheme NAME      Delta scheme (default: standard)
//   --separator CHAR   Record separator byte (default: +)
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use morfa_dict::encoder::{infix_encode_utf8, prefix_encode_utf8, standard_encode_utf8};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (scheme, args) = morfa_cli::parse_option(&args, "scheme");
    let (separator, args) = morfa_cli::parse_option(&args, "separator");

    if morfa_cli::wants_help(&args) {
        println!("morfa-encode: turn training triples into dictionary records.");
        println!();
        println!("Usage: morfa-encode [--scheme standard|prefix|infix] [--separator CHAR]");
        println!();
        println!("Reads tab-separated \"form lemma tag\" triples from stdin and");
        println!("writes one encoded record per line.");
        println!();
        println!("Options:");
        println!("  --scheme NAME      Delta scheme (default: standard)");
        println!("  --separator CHAR   Record separator byte (default: +)");
        println!("  -h, --help         Print this help");
        return;
    }

    let encode = match scheme.as_deref().unwrap_or("standard") {
        "standard" => standard_encode_utf8,
        "prefix" => prefix_encode_utf8,
        "infix" => infix_encode_utf8,
        other => morfa_cli::fatal(&format!(
            "unknown scheme {other:?}; expected standard, prefix or infix"
        )),
    };

    let separator = match separator.as_deref() {
        None => b'+',
        Some(s) if s.len() == 1 && s.as_bytes()[0].is_ascii() => s.as_bytes()[0],
        Some(s) => morfa_cli::fatal(&format!("separator must be one ASCII byte, got {s:?}")),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let (Some(form), Some(lemma), Some(tag)) =
            (fields.next(), fields.next(), fields.next())
        else {
            eprintln!("line {}: expected form<TAB>lemma<TAB>tag", line_no + 1);
            continue;
        };

        let record = encode(form, lemma, tag, separator);
        let _ = out.write_all(&record);
        let _ = out.write_all(b"\n");
    }
}
