//! snipline - print highlighted C/C++ snippets the way a compiler shows
//! them under a diagnostic

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use snipline::{
    Config, Frontend, Highlighter, Keywords, LangOptions, LangStandard, RawLexer, Result,
    SavePoints, SnipError, SnippetRenderer, SourceManager,
};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    standard: Option<LangStandard>,
    line_numbers: bool,
    no_color: bool,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    /// 1-based inclusive line range
    range: Option<(usize, usize)>,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by `SNIPLINE_LOG` (e.g. `SNIPLINE_LOG=snipline=trace`)
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("SNIPLINE_LOG").is_ok() {
        let filter = EnvFilter::from_env("SNIPLINE_LOG");
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(opts) = parse_args(&args)? else {
        return Ok(());
    };
    let Some(path) = opts.file else {
        print_usage();
        return Err(SnipError::InvalidArgument("no input file".to_string()));
    };

    let mut config = match &opts.config {
        Some(config_path) => Config::load_from(config_path)?,
        None => Config::load()?,
    };
    if opts.line_numbers {
        config.show_line_numbers = true;
    }
    if opts.no_color || !io::stdout().is_terminal() {
        config.color = false;
    }

    let lang = opts
        .standard
        .or(config.standard)
        .map(LangOptions::new)
        .or_else(|| LangOptions::for_path(&path))
        .unwrap_or_default();

    let mut sources = SourceManager::new();
    let file = sources.load_file(&path)?;
    let line_count = sources.file(file).map_or(1, |f| f.line_count());
    let (first, last) = opts.range.unwrap_or((1, line_count));
    if last > line_count {
        return Err(SnipError::LineOutOfRange { line: last, count: line_count });
    }

    let lexer = RawLexer::new(lang);
    let keywords = Keywords::new();
    let mut saves = SavePoints::new();
    saves.build(file, &lexer, &sources, config.save_interval);

    let frontend = Frontend::new(&lexer, &sources, &keywords, &saves);
    let highlighter = Highlighter::new(Some(frontend), lang);
    let renderer = SnippetRenderer::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render_snippet(&mut out, &sources, file, &highlighter, first - 1, last - 1)
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut opts = Options::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--std" | "-s" => {
                let name = iter
                    .next()
                    .ok_or_else(|| SnipError::InvalidArgument(format!("{} needs a value", arg)))?;
                let standard = LangStandard::from_name(name)
                    .ok_or_else(|| SnipError::UnknownStandard(name.clone()))?;
                opts.standard = Some(standard);
            }
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| SnipError::InvalidArgument(format!("{} needs a value", arg)))?;
                opts.config = Some(PathBuf::from(path));
            }
            "--line-numbers" | "-n" => opts.line_numbers = true,
            "--no-color" => opts.no_color = true,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(SnipError::InvalidArgument(format!("unknown option: {}", s)));
            }
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [] => {}
        [file] => opts.file = Some(PathBuf::from(file)),
        [file, range] => {
            opts.file = Some(PathBuf::from(file));
            opts.range = Some(parse_range(range)?);
        }
        _ => return Err(SnipError::InvalidArgument("too many arguments".to_string())),
    }
    Ok(Some(opts))
}

/// Parse `LINE` or `LINE:END` (1-based, inclusive)
fn parse_range(s: &str) -> Result<(usize, usize)> {
    let bad = || SnipError::InvalidArgument(format!("invalid line range: {}", s));
    let (first, last) = match s.split_once(':') {
        Some((a, b)) => (a.parse::<usize>(), b.parse::<usize>()),
        None => (s.parse::<usize>(), s.parse::<usize>()),
    };
    let (first, last) = (first.map_err(|_| bad())?, last.map_err(|_| bad())?);
    if first == 0 || last < first {
        return Err(bad());
    }
    Ok((first, last))
}

fn print_usage() {
    println!("snipline {} - highlight C/C++ source snippets", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: snipline [OPTIONS] FILE [LINE[:END]]");
    println!();
    println!("Options:");
    println!("  -s, --std STD         Language standard (c89..c23, c++98..c++23)");
    println!("  -n, --line-numbers    Show line numbers");
    println!("      --no-color        Print plain text");
    println!("  -c, --config PATH     Read settings from PATH instead of ~/.snipline.toml");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Set SNIPLINE_LOG=snipline=trace to log per-line highlighting to stderr.");
}

fn print_version() {
    println!("snipline {}", env!("CARGO_PKG_VERSION"));
}
