//! cellsort - sort CSV grids with spreadsheet comparator chains.

mod storage;

use anyhow::{Context, Result, anyhow};
use cellsort_core::{
    AliasSet, BuiltinComparatorProvider, ComparatorProvider, FilteredComparatorProvider, Info,
    InfoSet, MappedComparatorProvider, ProviderContext, parse_list_resolved, sort_grid,
};
use cellsort_engine::{BasicConverter, ComparatorName};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn print_usage() {
    eprintln!("Usage: cellsort [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    CSV file to sort");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --sort <SPEC>         Sort spec, e.g. \"A=text DOWN;B=number\"");
    eprintln!("  --missing-last            Place unconvertible cells after convertible ones");
    eprintln!("  --aliases <TEXT>          Expose comparators under aliases only,");
    eprintln!("                            e.g. \"txt text, day day-of-month\"");
    eprintln!("  --only <NAMES>            Restrict to a comma-separated set of names");
    eprintln!("  --list-comparators        List available comparators and exit");
    eprintln!("  --json                    Use JSON for --list-comparators output");
    eprintln!("  -o, --output <FILE>       Write sorted CSV to a file instead of stdout");
    eprintln!("  -h, --help                Print help");
}

struct Options {
    file: Option<PathBuf>,
    sort: Option<String>,
    missing_last: bool,
    aliases: Option<String>,
    only: Option<String>,
    list: bool,
    json: bool,
    output: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options {
        file: None,
        sort: None,
        missing_last: false,
        aliases: None,
        only: None,
        list: false,
        json: false,
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "-s" | "--sort" => {
                i += 1;
                options.sort = Some(
                    args.get(i)
                        .ok_or_else(|| anyhow!("--sort requires a value"))?
                        .clone(),
                );
            }
            "--missing-last" => options.missing_last = true,
            "--aliases" => {
                i += 1;
                options.aliases = Some(
                    args.get(i)
                        .ok_or_else(|| anyhow!("--aliases requires a value"))?
                        .clone(),
                );
            }
            "--only" => {
                i += 1;
                options.only = Some(
                    args.get(i)
                        .ok_or_else(|| anyhow!("--only requires a value"))?
                        .clone(),
                );
            }
            "--list-comparators" => options.list = true,
            "--json" => options.json = true,
            "-o" | "--output" => {
                i += 1;
                options.output = Some(PathBuf::from(
                    args.get(i)
                        .ok_or_else(|| anyhow!("--output requires a file path"))?,
                ));
            }
            arg if arg.starts_with('-') => {
                return Err(anyhow!("Unknown option: {}", arg));
            }
            arg => {
                if options.file.is_some() {
                    return Err(anyhow!("Unexpected argument: {}", arg));
                }
                options.file = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    Ok(Some(options))
}

/// Layer the provider chain: builtins, renamed by --aliases, restricted by
/// --only.
fn build_provider(options: &Options) -> Result<Arc<dyn ComparatorProvider>> {
    let mut provider: Arc<dyn ComparatorProvider> = Arc::new(BuiltinComparatorProvider::new());

    if let Some(aliases) = &options.aliases {
        let aliases: AliasSet = aliases
            .parse()
            .with_context(|| format!("Invalid --aliases \"{}\"", aliases))?;
        provider = Arc::new(MappedComparatorProvider::new(aliases, provider));
    }

    if let Some(only) = &options.only {
        let available = provider.infos();
        let mut declared = Vec::new();
        for token in only.split(',') {
            let name: ComparatorName = token
                .trim()
                .parse()
                .with_context(|| format!("Invalid --only name \"{}\"", token.trim()))?;
            let info = available
                .get(&name)
                .ok_or_else(|| anyhow!("Unknown comparator {}", name))?;
            declared.push(Info::new(info.url.clone(), name));
        }
        let declared = InfoSet::new(declared).context("Invalid --only list")?;
        provider = Arc::new(FilteredComparatorProvider::new(provider, declared));
    }

    Ok(provider)
}

fn run(options: Options) -> Result<()> {
    let provider = build_provider(&options)?;

    if options.list {
        let infos = provider.infos();
        if options.json {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        } else {
            print!("{}", infos.tree_print("comparators"));
        }
        return Ok(());
    }

    let file = options
        .file
        .as_ref()
        .ok_or_else(|| anyhow!("No input file given"))?;
    let spec = options
        .sort
        .as_ref()
        .ok_or_else(|| anyhow!("No sort spec given; use --sort"))?;

    let grid = storage::csv::parse_csv(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let resolved = parse_list_resolved(spec, provider.as_ref(), &ProviderContext::default())?;
    let sorted = sort_grid(&grid, &resolved, options.missing_last, &BasicConverter)?;
    let output = storage::csv::write_csv_content(&sorted);

    match &options.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", output),
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
