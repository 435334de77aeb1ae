use argh::{EarlyExit, FromArgs};
use log::debug;

use crate::generate::Generation;
use crate::utils::charset::Flags;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(description = "Deterministic string generator")]
struct Global {
    #[argh(option, short = 's', long = "string", description = "input string")]
    string: String,

    #[argh(option, short = 'l', long = "length", description = "output length")]
    length: i64,

    #[argh(switch, short = 'n', long = "no-symbols", description = "exclude symbols")]
    no_symbols: bool,

    #[argh(switch, short = 'd', long = "digits-only", description = "digits only")]
    digits_only: bool,

    #[argh(switch, short = 'a', long = "letters-only", description = "letters only")]
    letters_only: bool,

    #[argh(switch, short = 'v', long = "verbose", description = "verbose mode")]
    verbose: bool,
}

#[derive(Debug, Default, PartialEq)]
pub struct GenerateOptions {
    pub input: String,
    pub length: i64,
    pub flags: Flags,
    pub verbose: bool,
}

impl From<Global> for GenerateOptions {
    fn from(args: Global) -> Self {
        Self {
            input: args.string,
            length: args.length,
            flags: Flags {
                no_symbols: args.no_symbols,
                digits_only: args.digits_only,
                letters_only: args.letters_only,
            },
            verbose: args.verbose,
        }
    }
}

const VALUE_OPTIONS: [&str; 4] = ["-s", "--string", "-l", "--length"];

// argh only knows `--help`. A `-h` given as the value of an option is left alone.
fn normalize(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for arg in args {
        let is_value = normalized
            .last()
            .is_some_and(|prev| VALUE_OPTIONS.contains(&prev.as_str()));
        if arg == "-h" && !is_value {
            normalized.push("--help".to_owned());
        } else {
            normalized.push(arg);
        }
    }
    normalized
}

pub fn parse(args: &[String]) -> Result<GenerateOptions, EarlyExit> {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => ("extenderpass", args),
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    Global::from_args(&[command], &rest).map(GenerateOptions::from)
}

pub fn verbose_requested(args: &[String]) -> bool {
    args.iter()
        .skip(1)
        .any(|arg| arg == "-v" || arg == "--verbose")
}

/// Runs the CLI against `args` (program name first) and returns the exit
/// status.
pub fn run(args: impl IntoIterator<Item = String>) -> i32 {
    let args = normalize(args);
    let options = match parse(&args) {
        Ok(options) => options,
        Err(exit) => {
            return match exit.status {
                Ok(()) => {
                    println!("{}", exit.output);
                    0
                }
                Err(()) => {
                    eprintln!("{}", exit.output);
                    1
                }
            };
        }
    };
    debug!("Generating with options: {:?}", options);

    match Generation::new(&options.input, options.length, options.flags) {
        Ok(generation) => {
            if options.verbose {
                println!("{}", generation);
            }
            println!("{}", generation.result);
            0
        }
        Err(e) => {
            debug!("Generation failed: {:?}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        normalize(list.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse(&args(&[
            "extenderpass", "-s", "hello", "-l", "8", "-n", "-d", "-a", "-v",
        ]))
        .unwrap();
        assert_eq!(options.input, "hello");
        assert_eq!(options.length, 8);
        assert_eq!(
            options.flags,
            Flags {
                no_symbols: true,
                digits_only: true,
                letters_only: true,
            }
        );
        assert!(options.verbose);
    }

    #[test]
    fn test_parse_long_names() {
        let options = parse(&args(&[
            "extenderpass",
            "--string",
            "",
            "--length",
            "3",
            "--letters-only",
        ]))
        .unwrap();
        assert_eq!(options.input, "");
        assert_eq!(options.length, 3);
        assert_eq!(options.flags, Flags::letters_only());
        assert!(!options.verbose);
    }

    #[test]
    fn test_short_help() {
        let exit = parse(&args(&["extenderpass", "-h"])).unwrap_err();
        assert_eq!(exit.status, Ok(()));
        assert!(exit.output.contains("--length"));
    }

    #[test]
    fn test_dash_h_as_input_string() {
        let options = parse(&args(&["extenderpass", "-s", "-h", "-l", "4"])).unwrap();
        assert_eq!(options.input, "-h");
    }

    #[test]
    fn test_missing_required() {
        let exit = parse(&args(&["extenderpass", "-s", "hello"])).unwrap_err();
        assert_eq!(exit.status, Err(()));
    }

    #[test]
    fn test_run_exit_codes() {
        assert_eq!(run(args(&["extenderpass", "-s", "hello", "-l", "8"])), 0);
        assert_eq!(run(args(&["extenderpass", "-s", "hello", "-l", "0"])), 1);
        assert_eq!(run(args(&["extenderpass", "--help"])), 0);
        assert_eq!(run(args(&["extenderpass", "-l", "x", "-s", "hello"])), 1);
    }

    #[test]
    fn test_verbose_requested() {
        assert!(verbose_requested(&args(&["extenderpass", "-s", "a", "-v"])));
        assert!(!verbose_requested(&args(&["extenderpass", "-s", "a"])));
    }
}
