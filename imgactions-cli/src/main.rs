use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use imgactions::{
    ActionSet, FitMode, ImagePipeline, OutputFormat, PipelineConfig, Shape, Source, Transformed,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "imgactions", version)]
struct Cli {
    /// Pipeline config JSON (quality table, corner radius, virtual size, font, threads).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Font file for text overlays; overrides the config file.
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform one image, or generate a placeholder when no input is given.
    Transform(TransformArgs),
    /// Transform many images with one set of actions.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct TransformArgs {
    /// Input image. Omit to render a virtual image.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    actions: ActionArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input images, processed in order.
    #[arg(long = "in", required = true, num_args = 1..)]
    in_paths: Vec<PathBuf>,

    /// Directory receiving `<stem>.<ext>` for every input; stems shared by several inputs
    /// become `<stem>-<index>.<ext>`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    actions: ActionArgs,
}

#[derive(Parser, Debug)]
struct ActionArgs {
    /// Action Set JSON; flags below override its fields.
    #[arg(long)]
    actions: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// 1-based page for document inputs.
    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    password: Option<String>,

    /// stretch, max, fit or zoom.
    #[arg(long)]
    mode: Option<FitMode>,

    /// none, circle, ellipse or roundedrectangle.
    #[arg(long)]
    shape: Option<Shape>,

    #[arg(long)]
    corner_radius: Option<u32>,

    /// Text drawn centred over the output.
    #[arg(long)]
    text: Option<String>,

    /// Draw only the initials of --text.
    #[arg(long, default_value_t = false)]
    initials: bool,

    #[arg(long)]
    text_color: Option<String>,

    /// Fill color for a virtual image.
    #[arg(long)]
    image_color: Option<String>,

    /// Pick the virtual image color from a hash of --text.
    #[arg(long, default_value_t = false)]
    hash_color: bool,

    /// Output format; inherited from the input when omitted.
    #[arg(long)]
    format: Option<OutputFormat>,
}

impl ActionArgs {
    fn resolve(&self) -> anyhow::Result<ActionSet> {
        let from_file = match &self.actions {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("read actions '{}'", path.display()))?;
                serde_json::from_str::<ActionSet>(&json)
                    .with_context(|| format!("parse actions '{}'", path.display()))?
            }
            None => ActionSet::default(),
        };
        let flags = ActionSet {
            width: self.width,
            height: self.height,
            page: self.page,
            document_password: self.password.clone(),
            fit_mode: self.mode,
            shape: self.shape,
            corner_radius: self.corner_radius,
            text: self.text.clone(),
            as_initials: self.initials.then_some(true),
            text_color: self.text_color.clone(),
            image_color: self.image_color.clone(),
            color_from_text_hash: self.hash_color.then_some(true),
            format: self.format,
        };
        let actions = flags.with_defaults(&from_file);
        actions.validate()?;
        Ok(actions)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_path(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(font) = cli.font {
        config.font_path = Some(font);
    }

    match cli.cmd {
        Command::Transform(args) => cmd_transform(config, args),
        Command::Batch(args) => cmd_batch(config, args),
    }
}

fn cmd_transform(config: PipelineConfig, args: TransformArgs) -> anyhow::Result<()> {
    let actions = args.actions.resolve()?;
    let source = match &args.in_path {
        Some(path) => read_source(path)?,
        None => Source::Virtual,
    };
    if !actions.has_any_actions() && !matches!(source, Source::Virtual) {
        tracing::info!("no actions requested; output re-encodes the input unchanged");
    }

    let pipeline = ImagePipeline::new(config)?;
    let out = pipeline.process(&source, &actions)?;
    write_output(&args.out, &out)?;
    eprintln!(
        "wrote {} ({}x{} {})",
        args.out.display(),
        out.resolved.width.unwrap_or_default(),
        out.resolved.height.unwrap_or_default(),
        out.format()
    );
    Ok(())
}

fn cmd_batch(mut config: PipelineConfig, args: BatchArgs) -> anyhow::Result<()> {
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    let actions = args.actions.resolve()?;
    let sources = args
        .in_paths
        .iter()
        .map(|p| read_source(p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let jobs: Vec<_> = sources.into_iter().map(|s| (s, actions.clone())).collect();

    let pipeline = ImagePipeline::new(config)?;
    let results = pipeline.process_batch_partial(&jobs);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let stems = output_stems(&args.in_paths);
    let mut failed = 0usize;
    for ((in_path, stem), result) in args.in_paths.iter().zip(stems).zip(results) {
        match result {
            Ok(out) => {
                let out_path = args
                    .out_dir
                    .join(format!("{stem}.{}", out.format().extension()));
                write_output(&out_path, &out)?;
                eprintln!("wrote {}", out_path.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {e}", in_path.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs failed", args.in_paths.len());
    }
    Ok(())
}

/// Output file stems in input order. A stem that more than one input shares is suffixed
/// with the input's index so no output overwrites another.
fn output_stems(in_paths: &[PathBuf]) -> Vec<String> {
    let stems: Vec<String> = in_paths
        .iter()
        .map(|p| {
            p.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_owned())
        })
        .collect();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for stem in &stems {
        *seen.entry(stem.as_str()).or_default() += 1;
    }
    stems
        .iter()
        .enumerate()
        .map(|(i, stem)| {
            if seen.get(stem.as_str()).copied().unwrap_or(0) > 1 {
                format!("{stem}-{i}")
            } else {
                stem.clone()
            }
        })
        .collect()
}

fn read_source(path: &Path) -> anyhow::Result<Source> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read input '{}'", path.display()))?;
    Ok(Source::detect(bytes))
}

fn write_output(path: &Path, out: &Transformed) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, &out.bytes).with_context(|| format!("write '{}'", path.display()))
}
