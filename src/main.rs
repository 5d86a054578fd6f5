//! CLI entry point for ime-dict-editor
//!
//! Provides a command-line interface for inspecting, editing and exporting
//! dictionary files, and for launching the GUI.

use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use ime_dict_editor::core::view::matches_search;
use ime_dict_editor::core::{Dictionary, DocumentStore, WordDraft, WordId, DEFAULT_PART_OF_SPEECH};
use ime_dict_editor::export::{
    batch_file_stem, in_document_order, parse_category_list, ExportFormat, WindowsProfile,
};
use ime_dict_editor::file::{write_atomic, DictionaryFile};
use ime_dict_editor::logging;
use ime_dict_editor::ui::{Controller, DeleteOutcome};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ime-dict-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dictionary statistics
    Stats {
        /// Path to the dictionary JSON file
        file: PathBuf,
    },

    /// List categories
    Categories {
        file: PathBuf,
    },

    /// List the words of one category
    Words {
        file: PathBuf,

        #[arg(short, long)]
        category: String,

        /// Only show words whose reading, word or description match
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Export words to IME formats
    Export {
        file: PathBuf,

        #[arg(short, long, value_enum)]
        format: FormatArg,

        /// Comma-separated category names (default: every enabled category)
        #[arg(long)]
        categories: Option<String>,

        /// Directory for output files
        #[arg(short = 'd', long, default_value = ".")]
        output_dir: PathBuf,

        /// Output file (single formats only; overrides --output-dir)
        #[arg(short, long, conflicts_with = "output_dir")]
        output: Option<PathBuf>,

        /// Write the Windows file as UTF-16LE with mapped parts of speech
        #[arg(long)]
        windows_native: bool,
    },

    /// Create a new, empty dictionary file
    New {
        file: PathBuf,

        #[arg(short, long)]
        name: Option<String>,
    },

    /// Add a category
    AddCategory {
        file: PathBuf,
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Include a category in exports
    EnableCategory {
        file: PathBuf,
        name: String,
    },

    /// Exclude a category from exports
    DisableCategory {
        file: PathBuf,
        name: String,
    },

    /// Add a word to a category
    AddWord {
        file: PathBuf,

        #[arg(short, long)]
        category: String,

        #[arg(short, long)]
        reading: String,

        #[arg(short, long)]
        surface: String,

        #[command(flatten)]
        extra: WordFields,
    },

    /// Edit a word, optionally moving it to another category
    EditWord {
        file: PathBuf,

        #[arg(short, long)]
        category: String,

        /// Word number as shown by `words`
        number: usize,

        /// Destination category
        #[arg(long)]
        to: Option<String>,

        #[arg(short, long)]
        reading: Option<String>,

        #[arg(short, long)]
        surface: Option<String>,

        #[command(flatten)]
        extra: WordFields,
    },

    /// Delete a word
    DeleteWord {
        file: PathBuf,

        #[arg(short, long)]
        category: String,

        /// Word number as shown by `words`
        number: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Launch the desktop editor
    Gui {
        file: Option<PathBuf>,
    },
}

/// Optional word fields shared by `add-word` and `edit-word`
#[derive(Args)]
struct WordFields {
    /// Part of speech
    #[arg(short, long)]
    pos: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Comma-separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum FormatArg {
    Csv,
    Txt,
    Macos,
    Windows,
    Json,
    All,
}

impl FormatArg {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Csv => Some(ExportFormat::Csv),
            Self::Txt => Some(ExportFormat::Txt),
            Self::Macos => Some(ExportFormat::MacPlist),
            Self::Windows => Some(ExportFormat::Windows),
            Self::Json | Self::All => None,
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Stats { file } => show_stats(&expand(&file)?),
        Commands::Categories { file } => list_categories(&expand(&file)?),
        Commands::Words { file, category, search } => {
            list_words(&expand(&file)?, &category, search.as_deref().unwrap_or(""))
        }
        Commands::Export {
            file,
            format,
            categories,
            output_dir,
            output,
            windows_native,
        } => {
            let profile = if windows_native {
                WindowsProfile::Native
            } else {
                WindowsProfile::Editor
            };
            let filter = categories.as_deref().map(parse_category_list);
            let output = output.as_deref().map(expand).transpose()?;

            export_files(
                &expand(&file)?,
                format,
                filter,
                &expand(&output_dir)?,
                output.as_deref(),
                profile,
            )
        }
        Commands::New { file, name } => create_dictionary(&expand(&file)?, name),
        Commands::AddCategory { file, name, description } => {
            let controller = open(&expand(&file)?)?;
            let name = controller.add_category(&name, &description)?;
            println!("{} Added category {}", "✓".green(), name.cyan());
            save(&controller)
        }
        Commands::EnableCategory { file, name } => set_enabled(&expand(&file)?, &name, true),
        Commands::DisableCategory { file, name } => set_enabled(&expand(&file)?, &name, false),
        Commands::AddWord {
            file,
            category,
            reading,
            surface,
            extra,
        } => {
            let controller = open(&expand(&file)?)?;
            let draft = WordDraft {
                reading,
                surface,
                part_of_speech: extra.pos.unwrap_or_else(|| DEFAULT_PART_OF_SPEECH.to_string()),
                description: extra.description.unwrap_or_default(),
                tags: extra.tags.unwrap_or_default(),
                category,
            };

            controller.submit_word(&draft, None)?;
            println!("{} Added {} ({})", "✓".green(), draft.surface.cyan(), draft.reading);
            save(&controller)
        }
        Commands::EditWord {
            file,
            category,
            number,
            to,
            reading,
            surface,
            extra,
        } => {
            let controller = open(&expand(&file)?)?;
            let id = word_id(&controller, &category, number)?;
            let mut draft = controller
                .draft_for(id)
                .ok_or_else(|| anyhow!("Word {} not found", number))?;

            if let Some(reading) = reading {
                draft.reading = reading;
            }
            if let Some(surface) = surface {
                draft.surface = surface;
            }
            if let Some(pos) = extra.pos {
                draft.part_of_speech = pos;
            }
            if let Some(description) = extra.description {
                draft.description = description;
            }
            if let Some(tags) = extra.tags {
                draft.tags = tags;
            }
            if let Some(to) = to {
                draft.category = to;
            }

            controller.submit_word(&draft, Some(id))?;
            println!(
                "{} Updated {} in {}",
                "✓".green(),
                draft.surface.cyan(),
                draft.category.cyan()
            );
            save(&controller)
        }
        Commands::DeleteWord {
            file,
            category,
            number,
            yes,
        } => {
            let controller = open(&expand(&file)?)?;
            let id = word_id(&controller, &category, number)?;

            let outcome = if yes {
                controller.delete_word(id, &|_: &str| true)?
            } else {
                controller.delete_word(id, &prompt_yes_no)?
            };

            match outcome {
                DeleteOutcome::Deleted(word) => {
                    println!("{} Deleted {} ({})", "✓".green(), word.surface.cyan(), word.reading);
                    save(&controller)
                }
                DeleteOutcome::Declined => {
                    println!("{}", "Nothing deleted".dimmed());
                    Ok(())
                }
            }
        }
        Commands::Gui { file } => launch_gui(file.as_deref().map(expand).transpose()?),
    }
}

/// Expands `~` and environment variables in a path argument
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path.to_str().ok_or_else(|| anyhow!("Invalid path encoding"))?;
    let expanded = shellexpand::full(raw).with_context(|| format!("Failed to expand {}", raw))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

fn open(path: &Path) -> anyhow::Result<Controller> {
    Controller::open_file(path.to_path_buf())
        .with_context(|| format!("Failed to open {}", path.display()))
}

fn save(controller: &Controller) -> anyhow::Result<()> {
    let path = controller.save()?;
    println!("{} Saved {}", "✓".green(), path.display());

    if let Some(backup) = controller.list_backups()?.first() {
        println!("  {} {}", "backup:".dimmed(), backup.display());
    }

    Ok(())
}

/// Resolves a 1-based word number within a category
fn word_id(controller: &Controller, category: &str, number: usize) -> anyhow::Result<WordId> {
    controller.with_dictionary(|dictionary| {
        let words = &dictionary
            .categories
            .get(category)
            .ok_or_else(|| anyhow!("Unknown category '{}'", category))?
            .words;

        number
            .checked_sub(1)
            .and_then(|index| words.get(index))
            .map(|word| word.id)
            .ok_or_else(|| anyhow!("No word number {} in '{}' ({} words)", number, category, words.len()))
    })
}

/// Asks for confirmation on stdin; anything but `y` declines
fn prompt_yes_no(message: &str) -> bool {
    print!("{} {} [y/N] ", "?".yellow().bold(), message);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

fn set_enabled(path: &Path, name: &str, enabled: bool) -> anyhow::Result<()> {
    let controller = open(path)?;
    controller.set_category_enabled(name, enabled)?;

    let state = if enabled { "enabled".green() } else { "disabled".yellow() };
    println!("{} {} is now {}", "✓".green(), name.cyan(), state);
    save(&controller)
}

fn create_dictionary(path: &Path, name: Option<String>) -> anyhow::Result<()> {
    let mut dictionary = Dictionary::default();
    if let Some(name) = name {
        dictionary.info.name = name;
    }

    let mut store = DocumentStore::with_dictionary(dictionary);
    let json = store.export_json(&ime_dict_editor::core::today())?;
    let file = DictionaryFile::create(path.to_path_buf(), &json)?;

    println!("{} Created {}", "✓".green(), file.path().display());
    Ok(())
}

/// Show dictionary statistics
fn show_stats(path: &Path) -> anyhow::Result<()> {
    let controller = open(path)?;
    let stats = controller.stats();

    controller.with_dictionary(|dictionary| {
        println!("{}", format!("📚 {}", dictionary.info.name).bold());
        if !dictionary.info.description.is_empty() {
            println!("   {}", dictionary.info.description.dimmed());
        }
        println!("   Updated: {}\n", dictionary.info.updated_date);

        println!("Categories:   {}", stats.categories.to_string().cyan());
        println!("Total words:  {}", stats.total_words.to_string().cyan());
        println!("Active words: {}\n", stats.active_words.to_string().green());

        for (name, category) in dictionary.categories.iter() {
            let line = format!("  {:<20} {:>5} words", name, category.words.len());
            if category.is_enabled() {
                println!("{}", line);
            } else {
                println!("{} {}", line.dimmed(), "(disabled)".dimmed());
            }
        }
    });

    Ok(())
}

/// List all categories
fn list_categories(path: &Path) -> anyhow::Result<()> {
    let controller = open(path)?;

    controller.with_dictionary(|dictionary| {
        println!("{}", format!("Categories in: {}\n", path.display()).bold());

        for (i, (name, category)) in dictionary.categories.iter().enumerate() {
            let marker = if category.is_enabled() { "✓".green() } else { "✗".red() };
            println!(
                "{} {} {} {}",
                format!("{:>3}.", i + 1).dimmed(),
                marker,
                name.cyan().bold(),
                format!("({} words)", category.words.len()).dimmed()
            );
            if !category.description_text().is_empty() {
                println!("       {}", category.description_text());
            }
        }
    });

    Ok(())
}

/// List the words of one category
fn list_words(path: &Path, category: &str, search: &str) -> anyhow::Result<()> {
    let controller = open(path)?;

    controller.with_dictionary(|dictionary| {
        let words = &dictionary
            .categories
            .get(category)
            .ok_or_else(|| anyhow!("Unknown category '{}'", category))?
            .words;

        let mut shown = 0;
        for (i, word) in words.iter().enumerate() {
            if !matches_search(word, search) {
                continue;
            }
            shown += 1;

            let tags = word.tag_list().join(", ");
            println!(
                "{} {} → {} {} {}",
                format!("{:>3}.", i + 1).dimmed(),
                word.reading,
                word.surface.green().bold(),
                format!("[{}]", word.part_of_speech_label()).magenta(),
                word.description_text()
            );
            if !tags.is_empty() {
                println!("      {}", format!("# {}", tags).cyan());
            }
        }

        if shown == 0 {
            println!("{}", "No words found".yellow());
        }

        Ok(())
    })
}

/// Export words to one or all formats
fn export_files(
    path: &Path,
    format: FormatArg,
    filter: Option<Vec<String>>,
    output_dir: &Path,
    output: Option<&Path>,
    profile: WindowsProfile,
) -> anyhow::Result<()> {
    let controller = open(path)?;

    // Filters select categories; rows always follow the document
    let selection =
        filter.map(|names| controller.with_dictionary(|dictionary| in_document_order(dictionary, &names)));
    let selection = selection.as_deref();

    if let Some(names) = selection {
        println!("{} Categories: {}", "→".cyan(), names.join(", "));

        let known = controller.category_names();
        for name in names.iter().filter(|name| !known.contains(name)) {
            println!("{} Unknown category {}", "⚠".yellow(), name.yellow());
        }
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    match (format, format.export_format()) {
        (FormatArg::All, _) => {
            if output.is_some() {
                bail!("--output cannot be used with --format all");
            }

            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("dictionary");
            let stem = batch_file_stem(stem, selection.unwrap_or_default())?;

            for format in ExportFormat::ALL {
                let exported = controller.export_with(format, selection, profile)?;
                let target = output_dir.join(format!("{}{}", stem, format.batch_suffix()));
                write_atomic(&target, &exported.bytes)?;
                report(&format.to_string(), &target, exported.categories, exported.rows);
            }
        }
        (_, Some(format)) => {
            let exported = controller.export_with(format, selection, profile)?;
            let target = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| output_dir.join(exported.file_name));
            write_atomic(&target, &exported.bytes)?;
            report(&format.to_string(), &target, exported.categories, exported.rows);
        }
        (_, None) => {
            let exported = controller.export_json()?;
            let target = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| output_dir.join(exported.file_name));
            write_atomic(&target, &exported.bytes)?;
            report("JSON", &target, exported.categories, exported.rows);
        }
    }

    Ok(())
}

fn report(label: &str, target: &Path, categories: usize, rows: usize) {
    println!(
        "{} {} → {} ({} categories, {} words)",
        "✓".green(),
        label.bold(),
        target.display(),
        categories,
        rows
    );
}

#[cfg(feature = "gui")]
fn launch_gui(file: Option<PathBuf>) -> anyhow::Result<()> {
    match ime_dict_editor::ui::App::new(file).run().value() {
        0 => Ok(()),
        code => bail!("GUI exited with status {}", code),
    }
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_file: Option<PathBuf>) -> anyhow::Result<()> {
    bail!("This build has no GUI; rebuild with `--features gui`")
}
