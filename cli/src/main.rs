//! paperfmt CLI - plain-text to research paper formatter

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paperfmt::{CleanupPreset, Document, FormatOptions, JsonFormat, Paper, RenderOptions};

#[derive(Parser)]
#[command(name = "paperfmt")]
#[command(version)]
#[command(about = "Format plain text into a structured research paper", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to all formats (Markdown, text, JSON)
    Convert {
        /// Input text files ("-" for stdin)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        paper: PaperArgs,
    },

    /// Convert text to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        #[command(flatten)]
        paper: PaperArgs,
    },

    /// Convert text to plain text with normalized paragraphs
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Wrap paragraphs at this many characters (0 disables wrapping)
        #[arg(long, default_value = "0")]
        width: u32,

        #[command(flatten)]
        paper: PaperArgs,
    },

    /// Convert text to JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        paper: PaperArgs,
    },

    /// Show detected section titles and counts
    Outline {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Longest line that may be treated as a heading
        #[arg(long, value_name = "CHARS")]
        max_heading_len: Option<usize>,

        /// Print the outline as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Paper metadata and formatting flags shared by the output commands.
#[derive(Args, Default)]
struct PaperArgs {
    /// Paper title
    #[arg(long)]
    title: Option<String>,

    /// Author line
    #[arg(long)]
    author: Option<String>,

    /// File containing the abstract
    #[arg(long, value_name = "FILE")]
    abstract_file: Option<PathBuf>,

    /// File containing references, one per line
    #[arg(long, value_name = "FILE")]
    references: Option<PathBuf>,

    /// Longest line that may be treated as a heading
    #[arg(long, value_name = "CHARS")]
    max_heading_len: Option<usize>,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,
}

impl PaperArgs {
    fn format_options(&self) -> FormatOptions {
        format_options(self.max_heading_len)
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new();
        if let Some(level) = self.cleanup {
            options = options.with_cleanup_preset(level.into());
        }
        options
    }

    /// Wrap a formatted body with the metadata given on the command line.
    fn build_paper(&self, body: Document) -> Result<Paper, Box<dyn std::error::Error>> {
        let mut paper = Paper::from_document(body);

        if let Some(ref title) = self.title {
            paper = paper.with_title(title.as_str());
        }
        if let Some(ref author) = self.author {
            paper = paper.with_author(author.as_str());
        }
        if let Some(ref path) = self.abstract_file {
            paper = paper.with_abstract(read_input(path)?);
        }
        if let Some(ref path) = self.references {
            paper = paper.with_references(&read_input(path)?);
        }

        Ok(paper)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup
    Standard,
    /// Aggressive cleanup (joins hyphenated line breaks)
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            output,
            paper,
        }) => cmd_convert(&inputs, output.as_deref(), &paper),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
            paper,
        }) => cmd_markdown(&input, output.as_deref(), frontmatter, &paper),
        Some(Commands::Text {
            input,
            output,
            width,
            paper,
        }) => cmd_text(&input, output.as_deref(), width, &paper),
        Some(Commands::Json {
            input,
            output,
            compact,
            paper,
        }) => cmd_json(&input, output.as_deref(), compact, &paper),
        Some(Commands::Outline {
            input,
            max_heading_len,
            json,
        }) => cmd_outline(&input, max_heading_len, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&[input], cli.output.as_deref(), &PaperArgs::default())
            } else {
                println!("{}", "Usage: paperfmt <FILE> [OUTPUT]".yellow());
                println!("       paperfmt --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read a whole input file, or stdin for "-".
fn read_input(path: &Path) -> io::Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn format_options(max_heading_len: Option<usize>) -> FormatOptions {
    match max_heading_len {
        Some(len) => FormatOptions::new().with_max_heading_len(len),
        None => FormatOptions::new(),
    }
}

fn format_input(
    input: &Path,
    options: &FormatOptions,
) -> Result<Document, Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    Ok(paperfmt::format_with_options(&text, options))
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Write paper.md, paper.txt and paper.json for one paper into `dir`.
fn write_outputs(
    paper: &Paper,
    dir: &Path,
    render_options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let markdown = paperfmt::render::to_markdown(paper, render_options)?;
    fs::write(dir.join("paper.md"), &markdown)?;

    let text = paperfmt::render::to_text(paper, render_options)?;
    fs::write(dir.join("paper.txt"), &text)?;

    let json = paperfmt::render::to_json(paper, JsonFormat::Pretty)?;
    fs::write(dir.join("paper.json"), &json)?;

    Ok(())
}

fn input_stem(input: &Path) -> String {
    if is_stdin(input) {
        return "stdin".to_string();
    }
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    args: &PaperArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let render_options = args.render_options().with_frontmatter(true);
    let format_options = args.format_options();

    if let [input] = inputs {
        let output_dir = output
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(format!("{}_output", input_stem(input))));

        let pb = ProgressBar::new(2);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
                .progress_chars("#>-"),
        );

        pb.set_message("Formatting text...");
        let body = format_input(input, &format_options)?;
        let paper = args.build_paper(body)?;
        pb.inc(1);

        pb.set_message("Writing outputs...");
        write_outputs(&paper, &output_dir, &render_options)?;
        pb.inc(1);

        pb.finish_with_message("Done!");

        println!("\n{} {}", "Output files:".green().bold(), output_dir.display());
        println!("  {} paper.md", "├─".dimmed());
        println!("  {} paper.txt", "├─".dimmed());
        println!("  {} paper.json", "└─".dimmed());
        return Ok(());
    }

    if inputs.iter().any(|p| is_stdin(p)) {
        return Err("stdin (\"-\") can only be converted on its own".into());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("paperfmt_output"));

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    log::debug!(
        "Converting {} files into {}",
        inputs.len(),
        output_dir.display()
    );
    pb.set_message("Formatting files...");
    let results = paperfmt::format_files(inputs, &format_options);

    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        pb.set_message(input.display().to_string());
        let written = result
            .map_err(Box::<dyn std::error::Error>::from)
            .and_then(|body| args.build_paper(body))
            .and_then(|paper| {
                write_outputs(&paper, &output_dir.join(input_stem(input)), &render_options)
            });

        if let Err(e) = written {
            pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
            failed += 1;
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} of {} files converted into {}",
        "Done!".green().bold(),
        inputs.len() - failed,
        inputs.len(),
        output_dir.display()
    );

    if failed > 0 {
        return Err(format!("{} file(s) failed", failed).into());
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    args: &PaperArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = format_input(input, &args.format_options())?;
    let paper = args.build_paper(body)?;

    let render_options = args.render_options().with_frontmatter(frontmatter);
    let markdown = paperfmt::render::to_markdown(&paper, &render_options)?;

    write_or_print(output, &markdown)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    width: u32,
    args: &PaperArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = format_input(input, &args.format_options())?;
    let paper = args.build_paper(body)?;

    let render_options = args.render_options().with_line_width(width);
    let text = paperfmt::render::to_text(&paper, &render_options)?;

    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &PaperArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = format_input(input, &args.format_options())?;
    let paper = args.build_paper(body)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = paperfmt::render::to_json(&paper, format)?;

    write_or_print(output, &json)
}

fn cmd_outline(
    input: &Path,
    max_heading_len: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = format_input(input, &format_options(max_heading_len))?;

    if json {
        let sections: Vec<_> = doc
            .sections
            .iter()
            .map(|s| serde_json::json!({ "title": s.title, "paragraphs": s.paragraphs.len() }))
            .collect();
        let outline = serde_json::json!({
            "sections": sections,
            "paragraph_count": doc.paragraph_count(),
        });
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!("{}", "Document Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (i, section) in doc.sections.iter().enumerate() {
        let title = section.title.as_deref().unwrap_or("(untitled)");
        println!(
            "{:>3}. {} {}",
            i + 1,
            title.bold(),
            format!("({} paragraphs)", section.paragraphs.len()).dimmed()
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    println!("{}: {}", "Sections".bold(), doc.section_count());
    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "paperfmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain-text to research paper formatter");
    println!();
    println!("License: MIT");
}
