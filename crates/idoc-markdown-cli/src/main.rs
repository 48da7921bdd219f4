use anyhow::{Context, Result};
use idoc_markdown_config::Config;
use idoc_markdown_engine::{
    Block, Document, HtmlHost, MarkdownDocument, PluginVocabulary, SCHEMA_ID, Session, io,
    parse_bytes, serialize, validate,
};
use std::{
    env,
    io::{Read, Write, stdin, stdout},
    path::Path,
    process,
};

const USAGE: &str = "<split|join|check|render> <file|->";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Split,
    Join,
    Check,
    Render,
}

impl Command {
    fn parse(arg: &str) -> Option<Self> {
        match arg {
            "split" => Some(Command::Split),
            "join" => Some(Command::Join),
            "check" => Some(Command::Check),
            "render" => Some(Command::Render),
            _ => None,
        }
    }
}

/// Raw bytes of the input: a file path, or stdin for `-`.
fn read_input(source: &str) -> Result<Vec<u8>> {
    if source == "-" {
        let mut bytes = Vec::new();
        stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(bytes);
    }
    let path = Path::new(source);
    if !path.exists() {
        return Err(io::IoError::NotFound(path.to_path_buf()).into());
    }
    std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

fn read_document(source: &str) -> Result<Document> {
    if source == "-" {
        let bytes = read_input(source)?;
        return Ok(parse_bytes(&bytes).context("Failed to parse stdin")?);
    }
    Ok(io::load_document(Path::new(source))?)
}

fn emit(text: &str) -> Result<()> {
    let mut out = stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn split(source: &str, config: &Config) -> Result<()> {
    let doc = read_document(source)?;
    let schema = config
        .schema
        .clone()
        .unwrap_or_else(|| SCHEMA_ID.to_string());
    let envelope = MarkdownDocument::wrap(doc, Some(schema));
    emit(&envelope.to_json()?)?;
    emit("\n")
}

fn join(source: &str) -> Result<()> {
    let bytes = read_input(source)?;
    let json = String::from_utf8(bytes).context("Envelope is not valid UTF-8")?;
    let envelope = MarkdownDocument::from_json(&json)?;
    let doc = envelope.into_document();
    log::debug!("joining {} blocks", doc.len());
    emit(&serialize(&doc))
}

fn describe(block: &Block, vocabulary: &PluginVocabulary) -> String {
    match block {
        Block::Prose(prose) => format!("prose ({} bytes)", prose.markdown.len()),
        Block::Plugin(plugin) => {
            let mut line = format!(
                "plugin `{}` [{}] ({} bytes)",
                plugin.language,
                vocabulary.classify(&plugin.language),
                plugin.content.len()
            );
            if !plugin.is_terminated() {
                line.push_str(" UNTERMINATED");
            }
            line
        }
    }
}

/// Returns false when the document does not survive a round trip.
fn check(source: &str, vocabulary: &PluginVocabulary) -> Result<bool> {
    let bytes = read_input(source)?;
    let doc = parse_bytes(&bytes).context("Input is not valid UTF-8")?;

    for (index, block) in doc.iter().enumerate() {
        println!("{index:>4}  {}", describe(block, vocabulary));
    }

    let mut ok = true;
    let text = serialize(&doc);
    if text.as_bytes() != bytes.as_slice() {
        eprintln!("Error: serialized text differs from the input");
        ok = false;
    }
    if let Err(report) = validate(&doc) {
        eprintln!("Error: block sequence is not serializable:\n{report}");
        ok = false;
    }

    let unterminated = doc.unterminated().len();
    if unterminated > 0 {
        eprintln!("Warning: {unterminated} plugin block(s) without a closing fence");
    }

    println!(
        "{} blocks, {} plugin blocks, round trip {}",
        doc.len(),
        doc.plugins().count(),
        if ok { "ok" } else { "FAILED" }
    );
    Ok(ok)
}

fn render(source: &str, vocabulary: PluginVocabulary) -> Result<()> {
    let bytes = read_input(source)?;
    let mut session = Session::with_vocabulary(HtmlHost::new(), vocabulary);
    log::info!("render session {}", session.id());
    if session.render_bytes(&bytes).is_none() {
        log::error!("input is not valid UTF-8; nothing rendered");
    }
    emit(&session.into_host().finish())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} {USAGE}", args[0]);
        process::exit(1);
    }
    let Some(command) = Command::parse(&args[1]) else {
        eprintln!("Error: unknown command '{}'", args[1]);
        eprintln!("Usage: {} {USAGE}", args[0]);
        process::exit(1);
    };
    let source = args[2].as_str();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let vocabulary = PluginVocabulary::with_tags(config.plugins.iter().cloned());

    match command {
        Command::Split => split(source, &config),
        Command::Join => join(source),
        Command::Check => {
            if !check(source, &vocabulary)? {
                process::exit(1);
            }
            Ok(())
        }
        Command::Render => render(source, vocabulary),
    }
}
