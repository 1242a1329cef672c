use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sigilcraft", version, about = "Deterministic numerology sigils")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a sigil PNG.
    Render(RenderArgs),
    /// Print the letters and numerology class of a phrase as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Phrase to encode.
    #[arg(long)]
    phrase: String,

    /// Sigil size; the image side is twice this.
    #[arg(long)]
    size: Option<u32>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also print the PNG as a base64 data URI on stdout.
    #[arg(long, default_value_t = false)]
    data_uri: bool,

    /// TTF/OTF font for the letter ring.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// JSON options file; flags take precedence over it.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Phrase to analyze.
    #[arg(long)]
    phrase: String,
}

#[derive(serde::Serialize)]
struct Inspection<'a> {
    phrase: &'a str,
    letters: sigilcraft::LetterSequence,
    numerology: sigilcraft::NumerologyClass,
    master: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_opts(config: Option<&Path>) -> anyhow::Result<sigilcraft::SigilOpts> {
    let opts = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            serde_json::from_str::<sigilcraft::SigilOpts>(&text)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => sigilcraft::SigilOpts::default(),
    };
    Ok(opts.with_env())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut opts = load_opts(args.config.as_deref())?;
    if args.font.is_some() {
        opts.font_path = args.font;
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if args.sequential {
        opts.parallel = false;
    }

    let generator = sigilcraft::SigilGenerator::new(opts)?;
    let request = sigilcraft::SigilRequest {
        phrase: args.phrase,
        size: args.size,
    };
    let sigil = generator.generate_request(&request)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &sigil.png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.data_uri {
        println!("{}", sigil.data_uri());
    }
    eprintln!(
        "wrote {} ({}x{}, numerology {}, letters {})",
        args.out.display(),
        sigil.width,
        sigil.height,
        sigil.numerology,
        sigil.letters
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let letters = sigilcraft::normalize_letters(&args.phrase).require_non_empty()?;
    let numerology = sigilcraft::numerology_of(&args.phrase)?;
    let out = Inspection {
        phrase: &args.phrase,
        letters,
        numerology,
        master: numerology.is_master(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
