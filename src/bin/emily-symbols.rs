// Emily Symbols CLI
// Generates JSON symbol dictionaries and answers one-off lookups

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use emily_symbols_core::settings::{default_settings_content, Settings};
use emily_symbols_core::{generate, AttachmentMethod, GenerateOptions, SymbolCodec, SymbolTable};

/// Stenographic symbol dictionary generator
#[derive(Parser, Debug)]
#[command(name = "emily-symbols")]
#[command(version)]
#[command(about = "Generates stenographic dictionaries for typing symbols with explicit spacing and capitalization", long_about = None)]
struct Args {
    /// Whether A/O mark where spaces go ("space") or which sides attach ("attachment")
    #[arg(short = 'm', long, value_name = "METHOD")]
    attachment_method: Option<AttachmentMethod>,

    /// Include duplicate entries with numbers embedded (e.g. both #SKWH and 1KW4)
    #[arg(long)]
    include_embedded_numbers: bool,

    /// Directory to put generated dictionaries in
    #[arg(short, long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Generate dictionaries for every attachment method (overrides --attachment-method)
    #[arg(long)]
    json_all: bool,

    /// TOML symbol table to use instead of the built-in one
    #[arg(short, long, value_name = "SYMBOLS")]
    symbols: Option<PathBuf>,

    /// Settings file (default: ~/.config/emily-symbols/settings.toml)
    #[arg(long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Print the translation of one stroke and exit
    #[arg(short, long, value_name = "STROKE", conflicts_with = "reverse")]
    lookup: Option<String>,

    /// Print the strokes producing an output and exit
    #[arg(short, long, value_name = "OUTPUT")]
    reverse: Option<String>,

    /// Print a settings template and exit
    #[arg(long)]
    print_settings: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main application state
struct Application {
    args: Args,
    settings: Settings,
    codec: SymbolCodec,
}

/// Attachment method from flags, then settings
fn resolve_method(args: &Args, settings: &Settings) -> AttachmentMethod {
    args.attachment_method
        .unwrap_or_else(|| settings.attachment_method())
}

impl Application {
    /// Load settings and the symbol table
    fn new(args: Args) -> Result<Self> {
        let settings = match &args.settings {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::load_default().context("failed to load default settings")?,
        };

        let symbols_path = args
            .symbols
            .as_deref()
            .or_else(|| settings.symbols_path());
        let table = match symbols_path {
            Some(path) => SymbolTable::from_file(path)
                .with_context(|| format!("failed to load symbol table from {}", path.display()))?,
            None => SymbolTable::standard(),
        };

        let codec = SymbolCodec::new(table, resolve_method(&args, &settings))
            .context("symbol table cannot be reversed")?;

        Ok(Self {
            args,
            settings,
            codec,
        })
    }

    /// Translate a single stroke
    fn lookup(&self, stroke: &str) -> Result<()> {
        let output = self
            .codec
            .lookup(stroke)
            .with_context(|| format!("no translation for '{}'", stroke))?;
        println!("{}", output);
        Ok(())
    }

    /// List every stroke that produces an output
    fn reverse(&self, output: &str) -> Result<()> {
        let strokes = self.codec.reverse_lookup(output);
        if strokes.is_empty() {
            anyhow::bail!("no stroke produces '{}'", output);
        }
        for stroke in strokes {
            println!("{}", stroke);
        }
        Ok(())
    }

    /// Write the JSON dictionaries
    fn generate(&self) -> Result<()> {
        let directory = self
            .args
            .directory
            .clone()
            .unwrap_or_else(|| self.settings.output_directory().to_path_buf());
        let options = GenerateOptions {
            embed_numbers: self.args.include_embedded_numbers || self.settings.embed_numbers(),
        };

        let methods: Vec<AttachmentMethod> = if self.args.json_all {
            AttachmentMethod::iter().collect()
        } else {
            vec![self.codec.method()]
        };

        std::fs::create_dir_all(&directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;

        for method in methods {
            let dictionary = generate(&self.codec.with_method(method), options);
            let path = dictionary
                .write_to(&directory)
                .with_context(|| format!("failed to write the {} dictionary", method))?;
            if self.args.verbose {
                println!("{}: {} entries", path.display(), dictionary.len());
            }
        }
        Ok(())
    }

    fn run(&self) -> Result<()> {
        if let Some(stroke) = &self.args.lookup {
            return self.lookup(stroke);
        }
        if let Some(output) = &self.args.reverse {
            return self.reverse(output);
        }
        self.generate()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if args.print_settings {
        print!("{}", default_settings_content());
        return Ok(());
    }

    let app = Application::new(args)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["emily-symbols"]);

        assert!(args.attachment_method.is_none());
        assert!(!args.include_embedded_numbers);
        assert!(args.directory.is_none());
        assert!(!args.json_all);
        assert!(args.symbols.is_none());
        assert!(args.lookup.is_none());
        assert!(args.reverse.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_with_options() {
        let args = Args::parse_from([
            "emily-symbols",
            "--attachment-method",
            "attachment",
            "--include-embedded-numbers",
            "--directory",
            "/tmp/out",
            "--json-all",
            "--verbose",
        ]);

        assert_eq!(args.attachment_method, Some(AttachmentMethod::Attachment));
        assert!(args.include_embedded_numbers);
        assert_eq!(args.directory, Some(PathBuf::from("/tmp/out")));
        assert!(args.json_all);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_reject_unknown_method() {
        let result = Args::try_parse_from(["emily-symbols", "--attachment-method", "glue"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_lookup_conflicts_with_reverse() {
        let result = Args::try_parse_from([
            "emily-symbols",
            "--lookup",
            "SKWHFR",
            "--reverse",
            " ! ",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_method_prefers_flag() {
        let settings = Settings::from_toml(
            r#"
            [general]
            attachment_method = "attachment"
            "#,
        )
        .unwrap();

        let args = Args::parse_from(["emily-symbols"]);
        assert_eq!(resolve_method(&args, &settings), AttachmentMethod::Attachment);

        let args = Args::parse_from(["emily-symbols", "-m", "space"]);
        assert_eq!(resolve_method(&args, &settings), AttachmentMethod::Space);
    }

    #[test]
    fn test_application_lookup_uses_resolved_method() {
        let args = Args::parse_from([
            "emily-symbols",
            "--settings",
            "/nonexistent/settings.toml",
        ]);
        assert!(Application::new(args).is_err());

        let settings = Settings::new();
        let args = Args::parse_from(["emily-symbols", "-m", "attachment"]);
        let codec = SymbolCodec::standard(resolve_method(&args, &settings));
        assert_eq!(codec.lookup("SKWHFR").unwrap(), " ! ");
    }
}
