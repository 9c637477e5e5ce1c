//! ocroutline CLI - outline extraction for scanned PDFs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ocroutline::convert::{BatchOptions, BatchProcessor, FileStatus, OutlineExtractor};
use ocroutline::{
    ExtractOptions, JsonFormat, LanguageSet, LineSelector, PdftoppmRasterizer, TesseractEngine,
};

#[derive(Parser)]
#[command(name = "ocroutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract title and heading outline from scanned PDFs", long_about = None)]
struct Cli {
    /// Directory containing the PDFs
    #[arg(value_name = "INPUT_DIR")]
    input: Option<PathBuf>,

    /// Directory receiving the JSON outlines
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(flatten)]
    ocr: OcrArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// OCR settings shared by every command that runs the engine.
#[derive(Args, Clone)]
struct OcrArgs {
    /// OCR languages, e.g. "eng+fra"
    #[arg(long, env = "OCROUTLINE_LANG", global = true)]
    lang: Option<String>,

    /// Rasterization resolution
    #[arg(long, env = "OCROUTLINE_DPI", default_value_t = ocroutline::parser::DEFAULT_DPI, global = true)]
    dpi: u32,

    /// pdftoppm executable
    #[arg(long, env = "OCROUTLINE_PDFTOPPM", value_name = "PATH", global = true)]
    pdftoppm: Option<PathBuf>,

    /// tesseract executable
    #[arg(long, env = "OCROUTLINE_TESSERACT", value_name = "PATH", global = true)]
    tesseract: Option<PathBuf>,

    /// Also read hOCR header, caption and floating-text lines
    #[arg(long, global = true)]
    all_line_kinds: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every PDF in a directory (default)
    Batch {
        /// Directory containing the PDFs
        #[arg(short, long, value_name = "DIR", default_value = "input")]
        input: PathBuf,

        /// Directory receiving the JSON outlines
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,

        /// Stop at the first failing file
        #[arg(long)]
        fail_fast: bool,

        /// Process files concurrently
        #[arg(short, long)]
        jobs: bool,
    },

    /// Extract the outline of a single PDF
    File {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Classify pre-computed hOCR pages, one file per page in order
    Hocr {
        /// hOCR files (page 1 first)
        #[arg(value_name = "FILE", required = true)]
        pages: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check that pdftoppm and tesseract are installed
    Check,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input,
            output,
            compact,
            fail_fast,
            jobs,
        }) => cmd_batch(&cli.ocr, &input, &output, compact, fail_fast, jobs),
        Some(Commands::File {
            input,
            output,
            compact,
        }) => cmd_file(&cli.ocr, &input, output.as_deref(), compact),
        Some(Commands::Hocr {
            pages,
            output,
            compact,
        }) => cmd_hocr(&cli.ocr, &pages, output.as_deref(), compact),
        Some(Commands::Check) => cmd_check(&cli.ocr),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = cli.input.unwrap_or_else(|| PathBuf::from("input"));
            let output = cli.output.unwrap_or_else(|| PathBuf::from("output"));
            cmd_batch(&cli.ocr, &input, &output, false, false, false)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn extract_options(args: &OcrArgs) -> Result<ExtractOptions, Box<dyn std::error::Error>> {
    let mut options = ExtractOptions::new().with_dpi(args.dpi);
    if let Some(ref lang) = args.lang {
        options = options.with_languages(LanguageSet::parse(lang)?);
    }
    if args.all_line_kinds {
        options = options.with_line_selector(LineSelector::AllLineKinds);
    }
    Ok(options)
}

fn build_extractor(args: &OcrArgs) -> Result<OutlineExtractor, Box<dyn std::error::Error>> {
    let options = extract_options(args)?;

    let mut rasterizer = PdftoppmRasterizer::new().with_dpi(options.dpi);
    if let Some(ref binary) = args.pdftoppm {
        rasterizer = rasterizer.with_binary(binary);
    }

    let mut engine = TesseractEngine::new().with_dpi(options.dpi);
    if let Some(ref binary) = args.tesseract {
        engine = engine.with_binary(binary);
    }

    Ok(OutlineExtractor::with_backends(rasterizer, engine, options))
}

fn emit(json: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn cmd_batch(
    args: &OcrArgs,
    input: &Path,
    output: &Path,
    compact: bool,
    fail_fast: bool,
    jobs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = build_extractor(args)?;
    let options = BatchOptions::new()
        .with_input_dir(input)
        .with_output_dir(output)
        .with_format(json_format(compact))
        .fail_fast(fail_fast)
        .with_parallel(jobs);
    let processor = BatchProcessor::new(extractor, options);

    let total = processor.inputs()?.len();
    if total == 0 {
        println!("{} {}", "No PDFs found in".yellow(), input.display());
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = processor.run_with_progress(|pdf| {
        let name = pdf.file_name().unwrap_or_default().to_string_lossy();
        pb.println(format!("Processing {}", name));
        pb.set_message(name.into_owned());
        pb.inc(1);
    });
    pb.finish_and_clear();
    let report = report?;

    for outcome in &report.outcomes {
        let name = outcome.input.display();
        match &outcome.status {
            FileStatus::Written { output, headings } => println!(
                "  {} {} -> {} ({} headings)",
                "✓".green(),
                name,
                output.display(),
                headings
            ),
            FileStatus::Skipped => println!("  {} {} (no pages)", "-".dimmed(), name),
            FileStatus::Failed(message) => println!("  {} {}: {}", "✗".red(), name, message),
        }
    }

    println!(
        "\n{} {} written, {} skipped, {} failed",
        "Done!".green().bold(),
        report.written(),
        report.skipped(),
        report.failed()
    );

    if !report.is_success() {
        return Err(format!("{} of {} files failed", report.failed(), report.total()).into());
    }

    Ok(())
}

fn cmd_file(
    args: &OcrArgs,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ocroutline::detect::sniff_pdf(input)?;
    let extractor = build_extractor(args)?;

    let Some(outline) = extractor.extract(input)? else {
        eprintln!("{} {} has no pages", "Skipped:".yellow(), input.display());
        return Ok(());
    };

    let json = ocroutline::render::to_json(&outline, json_format(compact))?;
    emit(&json, output)
}

fn cmd_hocr(
    args: &OcrArgs,
    pages: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let markup = pages
        .iter()
        .map(fs::read)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .collect::<Vec<_>>();

    let extractor = OutlineExtractor::new(extract_options(args)?);
    let outline = extractor.outline_from_hocr(&markup)?;

    let json = ocroutline::render::to_json(&outline, json_format(compact))?;
    emit(&json, output)
}

fn cmd_check(args: &OcrArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tools = ocroutline::ocr::check_tools(args.pdftoppm.as_deref(), args.tesseract.as_deref());

    let mut missing = 0;
    for tool in &tools {
        if tool.available {
            println!("{} {}", "found".green(), tool.binary.display());
        } else {
            println!(
                "{} {} (install {})",
                "missing".red(),
                tool.binary.display(),
                tool.package
            );
            missing += 1;
        }
    }

    if missing > 0 {
        return Err(format!("{} required tool(s) missing", missing).into());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "ocroutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Title and heading outline extraction for scanned PDFs");
    println!();
    println!("License: MIT");
}
