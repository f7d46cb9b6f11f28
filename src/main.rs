use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cheatsheet::builder::CheatsheetBuilder;
use cheatsheet::model;

/// Create a PDF cheatsheet from structured content.
///
/// The sections file is a JSON array of objects with optional `heading`
/// (string) and `items` (array of strings) keys.  Fonts are resolved from
/// `assets/fonts` or the system font directories; see `assets/fonts/README.md`
/// or set `CHEATSHEET_FONTS_DIR`.
#[derive(Parser)]
#[command(author, version, about = "Create a PDF cheatsheet from structured content")]
struct Cli {
    /// Title for the cheatsheet.
    #[arg(long, short)]
    title: String,

    /// Path to the JSON file containing sections.
    #[arg(long, short)]
    sections: PathBuf,

    /// Output PDF path.
    #[arg(long, short, default_value = "cheatsheet.pdf")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.sections.exists() {
        eprintln!(
            "Error: sections file not found: {}",
            cli.sections.display()
        );
        return ExitCode::from(1);
    }

    match run(&cli) {
        Ok(output) => {
            println!("Created cheatsheet: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(err.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, Box<dyn Error>> {
    let json = fs::read_to_string(&cli.sections)?;
    let sections = model::sections_from_json(&json)?;

    let builder = CheatsheetBuilder::new(cli.title.clone()).with_sections(sections);
    let output = builder.render_to_file(&cli.output)?;
    Ok(output)
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
