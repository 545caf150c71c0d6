use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use logos_protocol::{Dictionary, Element, Lexicon, LexiconIndex, PartOfSpeech};
use logos_wasm::{Pipeline, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles Logos lexicons and realises element trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON dictionary into an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Print the entry for a word in a compiled lexicon
    Lookup {
        #[arg(short, long, value_name = "FILE")]
        lexicon: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Pos::Noun)]
        pos: Pos,

        word: String,
    },
    /// Realise a JSON element tree into a sentence
    Realise {
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        /// JSON with optional "syntax" and "orthography" sections
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(value_name = "FILE")]
        tree: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pos {
    Noun,
    Adjective,
    Verb,
    Adverb,
    Article,
    Preposition,
    Pronoun,
}

impl From<Pos> for PartOfSpeech {
    fn from(pos: Pos) -> Self {
        match pos {
            Pos::Noun => PartOfSpeech::Noun,
            Pos::Adjective => PartOfSpeech::Adjective,
            Pos::Verb => PartOfSpeech::Verb,
            Pos::Adverb => PartOfSpeech::Adverb,
            Pos::Article => PartOfSpeech::Article,
            Pos::Preposition => PartOfSpeech::Preposition,
            Pos::Pronoun => PartOfSpeech::Pronoun,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();

    match Cli::parse().command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Lookup { lexicon, pos, word } => lookup(&lexicon, pos.into(), &word),
        Command::Realise { lexicon, config, tree } => realise(lexicon.as_deref(), config.as_deref(), &tree),
    }
}

fn compile(input: &Path, output: &Path) -> anyhow::Result<()> {
    println!("📖 Reading JSON from {:?}...", input);
    let input_data = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let dict: Dictionary = serde_json::from_str(&input_data).context("parsing dictionary JSON")?;

    // Duplicate (base, pos) pairs would shadow each other at lookup time.
    LexiconIndex::from_dictionary(dict.clone())?;

    println!("⚙️  Compiling Dictionary version {} with {} entries...", dict.version, dict.entries.len());
    let bytes = rkyv::to_bytes::<_, 256>(&dict).map_err(|e| anyhow!("rkyv serialization failed: {:?}", e))?;

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    info!(bytes = bytes.len(), "archive written");
    println!("✅ Success! Binary written to {:?}", output);
    Ok(())
}

fn load_pipeline(path: &Path) -> anyhow::Result<Pipeline> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pipeline = Pipeline::from_archive(&bytes)?;
    debug!(entries = pipeline.lexicon().len(), "lexicon ready");
    Ok(pipeline)
}

fn lookup(lexicon: &Path, pos: PartOfSpeech, word: &str) -> anyhow::Result<()> {
    let pipeline = load_pipeline(lexicon)?;
    let Some(entry) = pipeline.lexicon().lookup(word, pos) else {
        bail!("no {:?} entry for '{}'", pos, word);
    };
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

fn realise(lexicon: Option<&Path>, config: Option<&Path>, tree: &Path) -> anyhow::Result<()> {
    let pipeline = match lexicon {
        Some(path) => load_pipeline(path)?,
        None => Pipeline::default(),
    };
    let pipeline = match config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let settings: Settings = serde_json::from_str(&text).context("parsing config JSON")?;
            pipeline.with_syntax_config(settings.syntax).with_orthography_config(settings.orthography)
        }
        None => pipeline,
    };

    let text = fs::read_to_string(tree).with_context(|| format!("reading {}", tree.display()))?;
    let element: Element = serde_json::from_str(&text).context("parsing element tree JSON")?;
    println!("{}", pipeline.realise(&element));
    Ok(())
}
