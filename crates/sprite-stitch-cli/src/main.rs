mod css;

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use globset::{Glob, GlobSet, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use sprite_stitch_core::{
    InputImage, LayoutKind, SheetConfig, layout_to_json, stitch_images,
};
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-stitch",
    about = "Pack images into a CSS sprite sheet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack images into a sheet (PNG + CSS + JSON)
    Pack(PackArgs),
    /// Layout-only: compute placements and export JSON, no PNG/CSS
    Layout(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Input file or directory
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Sheet base name (files will be name.png/.css/.json)
    #[arg(short, long, default_value = "sheet", help_heading = "Input/Output")]
    name: String,
    /// YAML config file path (overrides layout-related options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Layout
    /// Layout strategy: packed | directory_based | fixed_dimension
    #[arg(long, value_parser = ["packed", "directory_based", "fixed_dimension"], default_value = "packed", help_heading = "Layout")]
    layout: String,
    /// Items per row (fixed_dimension layout only)
    #[arg(long, default_value_t = 16, help_heading = "Layout")]
    items_per_row: u32,

    // Image Processing
    /// Trim transparent borders before layout
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Image Processing")]
    trim: bool,
    /// Alpha value treated as transparent padding
    #[arg(long, default_value_t = 0, help_heading = "Image Processing")]
    padding_alpha: u8,

    // Export
    /// URL of the sheet image referenced from the stylesheet (defaults to name.png)
    #[arg(long, help_heading = "Export")]
    sheet_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, false),
        Commands::Layout(args) => run_pack(args, true),
    }
}

fn run_pack(args: &PackArgs, layout_only: bool) -> anyhow::Result<()> {
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create out_dir {}", args.out_dir.display()))?;

    let mut cfg = SheetConfig {
        layout: LayoutKind::from_str(&args.layout)
            .map_err(|_| anyhow::anyhow!("unknown layout: {}", args.layout))?,
        items_per_row: args.items_per_row,
        trim: args.trim,
        padding_alpha: args.padding_alpha,
    };
    // Config file sets layout-related options en bloc over the CLI flags.
    if let Some(path) = &args.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.into_sheet_config(cfg)?;
    }

    let inputs = collect_inputs(&args.input, &args.include, &args.exclude)?;
    info!(count = inputs.len(), "collected input images");

    let out = stitch_images(inputs, cfg)?;
    info!(
        width = out.layout.width(),
        height = out.layout.height(),
        items = out.layout.len(),
        "layout complete"
    );

    let json = layout_to_json(&out.layout, &out.items)?;
    let json_path = args.out_dir.join(format!("{}.json", args.name));
    fs::write(&json_path, serde_json::to_string_pretty(&json)?)
        .with_context(|| format!("write {}", json_path.display()))?;

    if layout_only {
        return Ok(());
    }

    let png_path = args.out_dir.join(format!("{}.png", args.name));
    out.rgba
        .save(&png_path)
        .with_context(|| format!("write {}", png_path.display()))?;

    let sheet_url = args
        .sheet_url
        .clone()
        .unwrap_or_else(|| format!("{}.png", args.name));
    let css = css::stylesheet(&out.layout, &out.items, &sheet_url)?;
    let css_path = args.out_dir.join(format!("{}.css", args.name));
    fs::write(&css_path, css).with_context(|| format!("write {}", css_path.display()))?;

    info!(
        png = %png_path.display(),
        css = %css_path.display(),
        "sheet written"
    );
    Ok(())
}

/// Optional YAML config; any field present overrides the corresponding CLI option.
#[derive(Debug, Deserialize)]
struct YamlConfig {
    layout: Option<String>,
    items_per_row: Option<u32>,
    trim: Option<bool>,
    padding_alpha: Option<u8>,
}

impl YamlConfig {
    fn into_sheet_config(self, mut base: SheetConfig) -> anyhow::Result<SheetConfig> {
        if let Some(s) = self.layout {
            base.layout = LayoutKind::from_str(&s)
                .map_err(|_| anyhow::anyhow!("unknown layout in config: {}", s))?;
        }
        if let Some(n) = self.items_per_row {
            base.items_per_row = n;
        }
        if let Some(t) = self.trim {
            base.trim = t;
        }
        if let Some(a) = self.padding_alpha {
            base.padding_alpha = a;
        }
        Ok(base)
    }
}

fn collect_inputs(
    input: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<InputImage>> {
    let include_set = build_globset(include)?;
    let exclude_set = build_globset(exclude)?;

    let mut list: Vec<InputImage> = Vec::new();
    if input.is_file() {
        let img = load_image(input)?;
        let key = input.to_string_lossy().replace('\\', "/");
        list.push(InputImage { key, image: img });
        return Ok(list);
    }

    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let p = entry.path();
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg") => {}
            _ => continue,
        }
        let rel = p.strip_prefix(input).unwrap_or(p);
        if let Some(set) = &include_set {
            if !set.is_match(rel) {
                continue;
            }
        }
        if let Some(set) = &exclude_set {
            if set.is_match(rel) {
                continue;
            }
        }
        match load_image(p) {
            Ok(img) => {
                let key = rel.to_string_lossy().replace('\\', "/");
                list.push(InputImage { key, image: img });
            }
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
    }
    Ok(list)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).with_context(|| format!("bad glob: {pat}"))?);
    }
    Ok(Some(builder.build()?))
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
