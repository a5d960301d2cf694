// morfa-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

use morfa_dict::{Dictionary, DictionaryError};

/// Default base name of a dictionary inside a search directory.
const DEFAULT_STEM: &str = "dict";

/// Automaton image file extension.
const FSA_EXT: &str = "fsa";

/// Sidecar features file extension.
const INFO_EXT: &str = "info";

/// Locate and load a dictionary.
///
/// `dict_path` may name the `.fsa` file itself, a base path without
/// extension, or a directory containing `dict.fsa`. Search order when it
/// is absent:
/// 1. the `MORFA_DICT_PATH` environment variable (same forms)
/// 2. `~/.morfa/dict.fsa`
/// 3. `./dict.fsa`
///
/// The sidecar `.info` file must sit next to the image.
pub fn load_dictionary(dict_path: Option<&str>) -> Result<Dictionary, String> {
    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(p) = dict_path {
        push_candidates(&mut candidates, Path::new(p));
    } else {
        if let Ok(env_path) = std::env::var("MORFA_DICT_PATH") {
            push_candidates(&mut candidates, Path::new(&env_path));
        }
        if let Ok(home) = std::env::var("HOME") {
            candidates.push(
                PathBuf::from(home)
                    .join(".morfa")
                    .join(DEFAULT_STEM)
                    .with_extension(FSA_EXT),
            );
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(DEFAULT_STEM).with_extension(FSA_EXT));
        }
    }

    for image_path in &candidates {
        if !image_path.is_file() {
            continue;
        }
        let info_path = image_path.with_extension(INFO_EXT);
        let image = std::fs::read(image_path)
            .map_err(|e| format!("failed to read {}: {e}", image_path.display()))?;
        let info = std::fs::read_to_string(&info_path)
            .map_err(|e| format!("failed to read {}: {e}", info_path.display()))?;
        return Dictionary::from_bytes(&image, &info)
            .map_err(|e: DictionaryError| format!("failed to load dictionary: {e}"));
    }

    Err(format!(
        "no dictionary found; looked for:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Expand one user-supplied path into image path candidates.
fn push_candidates(candidates: &mut Vec<PathBuf>, path: &Path) {
    if path.extension().is_some_and(|e| e == FSA_EXT) {
        candidates.push(path.to_path_buf());
    } else if path.is_dir() {
        candidates.push(path.join(DEFAULT_STEM).with_extension(FSA_EXT));
    } else {
        candidates.push(path.with_extension(FSA_EXT));
    }
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line
/// args. Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Take the value of a `--name VALUE` or `--name=VALUE` option out of the
/// args. Returns `(value, remaining_args)`.
pub fn parse_option(args: &[String], name: &str) -> (Option<String>, Vec<String>) {
    let long = format!("--{name}");
    let long_eq = format!("--{name}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&long_eq) {
            value = Some(v.to_string());
        } else if *arg == long {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check for a boolean flag, removing it from the args.
pub fn take_flag(args: &[String], flag: &str) -> (bool, Vec<String>) {
    let mut found = false;
    let remaining = args
        .iter()
        .filter(|a| {
            if *a == flag {
                found = true;
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();
    (found, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
