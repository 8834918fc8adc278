use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use braces::{ExpandFlags, ParseFlags, Renderer};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "braces", about = "Expand shell-style brace patterns")]
enum Options {
    /// Print every expansion, one per line.
    Expand(Args),
    /// Print the compiled tree of each pattern.
    Tree(Args),
}

#[derive(clap::Args)]
struct Args {
    patterns: Vec<String>,
    /// Read additional patterns from a file, one per line.
    #[arg(long)]
    file: Option<Utf8PathBuf>,
    /// Treat `\` as an ordinary character.
    #[arg(long)]
    ignore_escape: bool,
    /// Treat quote characters as ordinary characters.
    #[arg(long)]
    ignore_quote: bool,
    /// Allow ranges between any two single characters.
    #[arg(long)]
    any_char_range: bool,
    /// Reject malformed input instead of keeping it as literal text.
    #[arg(long)]
    strict: bool,
    /// Keep `\` in front of escaped characters.
    #[arg(long)]
    keep_escape: bool,
    /// Keep quote characters in the output.
    #[arg(long)]
    keep_quote: bool,
}

impl Args {
    fn parse_flags(&self) -> ParseFlags {
        let mut flags = ParseFlags::empty();
        flags.set(ParseFlags::IGNORE_ESCAPE, self.ignore_escape);
        flags.set(ParseFlags::IGNORE_QUOTE, self.ignore_quote);
        flags.set(ParseFlags::ANY_CHAR_RANGE, self.any_char_range);
        flags.set(ParseFlags::STRICT, self.strict);
        flags
    }

    fn expand_flags(&self) -> ExpandFlags {
        let mut flags = ExpandFlags::empty();
        flags.set(ExpandFlags::KEEP_ESCAPE, self.keep_escape);
        flags.set(ExpandFlags::KEEP_QUOTE, self.keep_quote);
        flags
    }

    /// Command-line patterns first, then the lines of `--file`, each paired
    /// with the origin used when reporting errors.
    fn patterns(&self) -> anyhow::Result<Vec<(String, String)>> {
        let mut patterns: Vec<_> = self
            .patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| (format!("<argument {}>", index + 1), pattern.clone()))
            .collect();

        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read `{path}`"))?;
            patterns.extend(
                text.lines()
                    .enumerate()
                    .map(|(index, line)| (format!("{path}:{}", index + 1), line.to_owned())),
            );
        }

        Ok(patterns)
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let (args, print_tree) = match Options::parse() {
        Options::Expand(args) => (args, false),
        Options::Tree(args) => (args, true),
    };

    let expand_flags = args.expand_flags();
    let mut parser = braces::Parser::new(args.parse_flags());
    let renderer = Renderer::styled();

    let mut out = BufWriter::new(io::stdout().lock());
    let mut buffer = Vec::new();
    let mut failed = false;

    for (origin, pattern) in args.patterns()? {
        debug!(%origin, %pattern, "compiling");
        let tree = match parser.parse(&pattern) {
            Ok(tree) => tree,
            Err(err) => {
                eprintln!("{}", err.render(&renderer, &origin, &pattern));
                failed = true;
                continue;
            }
        };

        if print_tree {
            write!(out, "{tree}").context("failed to write output")?;
            continue;
        }

        let mut result = Ok(());
        braces_expand::walk(&tree, expand_flags, &mut buffer, |expansion| {
            if result.is_ok() {
                result = out.write_all(expansion).and_then(|()| out.write_all(b"\n"));
            }
        });
        result.context("failed to write output")?;
    }

    out.flush().context("failed to write output")?;
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
