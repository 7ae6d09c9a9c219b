//! Command-line front end: list the key paths in a YAML document, or
//! resolve the path at a byte offset.

use std::io::Read;

use clap::Parser;
use eyre::WrapErr;
use yamlnav_core::{CursorState, Symbol, build_symbols, resolve_current_symbol};
use yamlnav_scan::scan_keys;

const EXIT_NO_MATCH: i32 = 1;

/// List YAML key paths in a document, or resolve the path at an offset.
#[derive(Parser, Debug)]
#[command(name = "yamlnav", version)]
struct Args {
    /// Input file, or `-` for stdin.
    input: String,

    /// Resolve the key path at this byte offset instead of listing all
    /// paths.
    #[arg(long)]
    at: Option<u32>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct SymbolRecord<'a> {
    name: &'a str,
    start: u32,
    end: u32,
}

impl<'a> From<&'a Symbol> for SymbolRecord<'a> {
    fn from(symbol: &'a Symbol) -> Self {
        Self {
            name: &symbol.name,
            start: symbol.region.start,
            end: symbol.region.end,
        }
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let source = read_input(&args.input)?;
    let tokens = scan_keys(&source);
    let symbols = build_symbols(&source, &tokens);

    match args.at {
        Some(offset) => {
            let cursor = CursorState::caret(offset);
            match resolve_current_symbol(&source, &symbols, &cursor) {
                Some(symbol) => {
                    if args.json {
                        println!("{}", serde_json::to_string(&SymbolRecord::from(symbol))?);
                    } else {
                        println!("{}", symbol.name);
                    }
                }
                None => {
                    eprintln!("no key path at offset {offset}");
                    std::process::exit(EXIT_NO_MATCH);
                }
            }
        }
        None => {
            if args.json {
                let records: Vec<SymbolRecord> = symbols.iter().map(SymbolRecord::from).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for symbol in &symbols {
                    println!(
                        "{}\t{}..{}",
                        symbol.name, symbol.region.start, symbol.region.end
                    );
                }
            }
        }
    }

    Ok(())
}

fn read_input(input: &str) -> eyre::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).wrap_err_with(|| format!("failed to read {input}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["yamlnav", "config.yml", "--at", "42", "--json"]).unwrap();
        assert_eq!(args.input, "config.yml");
        assert_eq!(args.at, Some(42));
        assert!(args.json);
    }

    #[test]
    fn record_from_symbol() {
        let symbol = Symbol {
            name: "a.b".to_string(),
            region: yamlnav_core::Span::new(5, 6),
        };
        let record = SymbolRecord::from(&symbol);
        assert_eq!(record.name, "a.b");
        assert_eq!((record.start, record.end), (5, 6));
    }
}
