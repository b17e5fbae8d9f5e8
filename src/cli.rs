// Command-line front end for idnconv.
//
// Converts domains (or URL hosts) given as arguments, read from a file, or
// read from stdin with one item per line.

use std::borrow::Cow;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use log::{debug, info};

use crate::charset::Charset;
use crate::convert::Converter;
use crate::error::Error;
use crate::idna::{ACE_PREFIX, ToAsciiOptions};
use crate::punycode;

const BUF_SIZE: usize = 64 * 1024;

fn parse_charset(s: &str) -> Result<Charset, String> {
    Charset::for_label(s).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Punycode / IDN domain converter.
#[derive(Parser, Debug)]
#[command(
    name = "idnconv",
    version,
    about = "Punycode (RFC 3492) domain converter",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress per-item error messages).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Convert Unicode domains to their ASCII (xn--) form.
    ToAscii(ConvertArgs),
    /// Convert ASCII (xn--) domains back to Unicode.
    ToUnicode(ConvertArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Read items from a file, one per line (default: stdin).
    #[arg(long, short = 'i', value_hint = ValueHint::FilePath, conflicts_with = "items")]
    input: Option<PathBuf>,

    /// Charset of file/stdin input and of to-unicode output.
    #[arg(long, value_parser = parse_charset, default_value = "utf-8")]
    charset: Charset,

    /// Treat each item as a URL and convert only its host.
    #[arg(long)]
    url: bool,

    /// Do not lower-case labels before encoding.
    #[arg(long = "keep-case")]
    keep_case: bool,

    /// Report failing items and continue with the rest.
    #[arg(long = "keep-going")]
    keep_going: bool,

    /// Domains (or URLs with --url) to convert.
    items: Vec<String>,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    ToAscii,
    ToUnicode,
}

impl Direction {
    fn name(self) -> &'static str {
        match self {
            Self::ToAscii => "to-ascii",
            Self::ToUnicode => "to-unicode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Convert(Direction),
    Config,
}

struct Options {
    command: Command,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    charset: Charset,
    url: bool,
    lowercase: bool,
    keep_going: bool,
    input_file: Option<PathBuf>,
    items: Vec<String>,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let json_output = cli.json_output;

    let (direction, args) = match cli.command {
        Cmd::ToAscii(args) => (Direction::ToAscii, args),
        Cmd::ToUnicode(args) => (Direction::ToUnicode, args),
        Cmd::Config => {
            return Options {
                command: Command::Config,
                quiet,
                verbose,
                json_output,
                charset: Charset::default(),
                url: false,
                lowercase: true,
                keep_going: false,
                input_file: None,
                items: Vec::new(),
            };
        }
    };

    Options {
        command: Command::Convert(direction),
        quiet,
        verbose,
        json_output,
        charset: args.charset,
        url: args.url,
        lowercase: !args.keep_case,
        keep_going: args.keep_going,
        input_file: args.input,
        items: args.items,
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("idnconv".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("idnconv version {version} (Rust)");
    eprintln!("Licensed under the MIT License");

    let parallel = cfg!(feature = "parallel") as u8;

    eprintln!("PARALLEL={parallel}");
    eprintln!("ACE_PREFIX={ACE_PREFIX}");
    eprintln!("BASE={}", punycode::BASE);
    eprintln!("TMIN={}", punycode::T_MIN);
    eprintln!("TMAX={}", punycode::T_MAX);
    eprintln!("SKEW={}", punycode::SKEW);
    eprintln!("DAMP={}", punycode::DAMP);
    eprintln!("INITIAL_BIAS={}", punycode::INITIAL_BIAS);
    eprintln!("INITIAL_N={:#X}", punycode::INITIAL_N);
    eprintln!("DELIMITER={}", punycode::DELIMITER);
    eprintln!("DEFAULT_CHARSET={}", Charset::default());

    0
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Collect the items to convert, each as bytes in the declared charset.
fn read_items(opts: &Options) -> Result<Vec<Vec<u8>>, String> {
    if !opts.items.is_empty() {
        // Arguments arrive as UTF-8 and are re-encoded into the charset so
        // every item takes the same path.
        return opts
            .items
            .iter()
            .map(|item| {
                opts.charset
                    .encode(item)
                    .map(Cow::into_owned)
                    .map_err(|e| format!("argument {item:?}: {e}"))
            })
            .collect();
    }

    let data = match &opts.input_file {
        Some(path) => {
            fs::read(path).map_err(|e| format!("input file: {}: {e}", path.display()))?
        }
        None => {
            let mut buf = Vec::with_capacity(BUF_SIZE);
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| format!("read error: {e}"))?;
            buf
        }
    };
    Ok(split_lines(&data))
}

/// Split on '\n', trim ASCII whitespace (including '\r'), drop blank lines.
fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    data.split(|&b| b == b'\n')
        .map(<[u8]>::trim_ascii)
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}

// ---------------------------------------------------------------------------
// Convert commands
// ---------------------------------------------------------------------------

fn convert_item(
    converter: &Converter,
    direction: Direction,
    url: bool,
    item: &[u8],
) -> Result<Vec<u8>, Error> {
    match (direction, url) {
        (Direction::ToAscii, false) => converter.to_ascii(item).map(String::into_bytes),
        (Direction::ToAscii, true) => converter.url_to_ascii(item).map(String::into_bytes),
        (Direction::ToUnicode, false) => converter.to_unicode(item),
        (Direction::ToUnicode, true) => converter.url_to_unicode(item),
    }
}

fn cmd_convert(opts: &Options, direction: Direction) -> i32 {
    let converter = Converter::new(opts.charset).with_options(ToAsciiOptions {
        lowercase: opts.lowercase,
    });

    let items = match read_items(opts) {
        Ok(items) => items,
        Err(msg) => {
            eprintln!("idnconv: {msg}");
            return 1;
        }
    };
    debug!(
        "{}: {} item(s), charset {}, url mode {}",
        direction.name(),
        items.len(),
        opts.charset,
        opts.url
    );

    let mut out = BufWriter::with_capacity(BUF_SIZE, io::stdout().lock());
    let mut converted = 0u64;
    let mut changed = 0u64;
    let mut failed = 0u64;

    for (index, item) in items.iter().enumerate() {
        match convert_item(&converter, direction, opts.url, item) {
            Ok(bytes) => {
                if bytes != *item {
                    changed += 1;
                }
                if let Err(e) = out.write_all(&bytes).and_then(|()| out.write_all(b"\n")) {
                    eprintln!("idnconv: write error: {e}");
                    return 1;
                }
                converted += 1;
            }
            Err(e) => {
                failed += 1;
                if !opts.quiet {
                    eprintln!("idnconv: item {}: {e}", index + 1);
                }
                if !opts.keep_going {
                    info!("stopping at first failure (use --keep-going to continue)");
                    break;
                }
            }
        }
    }

    if let Err(e) = out.flush() {
        eprintln!("idnconv: write flush error: {e}");
        return 1;
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "idnconv: {}: items: {}, converted: {converted}, changed: {changed}, failed: {failed}",
            direction.name(),
            items.len()
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": direction.name(),
            "charset": opts.charset.name(),
            "items": items.len(),
            "converted": converted,
            "changed": changed,
            "failed": failed,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    }

    if failed > 0 { 1 } else { 0 }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn init_logging(opts: &Options) {
    let default_filter = match (opts.quiet, opts.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);
    init_logging(&opts);

    let exit_code = match opts.command {
        Command::Convert(direction) => cmd_convert(&opts, direction),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
