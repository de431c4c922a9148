use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use iconsmith::{AssetGenerator as _, GeneratorOpts, IosAssetGenerator, Project, Rgba8};

#[derive(Parser, Debug)]
#[command(name = "iconsmith", version)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate icons and splash screens from the masters in the assets directory.
    Generate(GenerateArgs),
    /// List the iOS output templates.
    Templates(TemplatesArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Project root.
    #[arg(long, default_value = ".")]
    project: PathBuf,

    /// Project file (defaults to `iconsmith.json` under the project root).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the source masters.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// iOS project directory (the one containing `App/Assets.xcassets`).
    #[arg(long)]
    ios_project: Option<PathBuf>,

    /// Logo width on splash screens, as a fraction of the logo's width.
    #[arg(long)]
    logo_splash_scale: Option<f64>,

    /// Light splash background, e.g. `#ffffff`.
    #[arg(long)]
    splash_color: Option<Rgba8>,

    /// Dark splash background, e.g. `#111111`.
    #[arg(long)]
    splash_color_dark: Option<Rgba8>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Print a JSON report of every written asset instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Print the templates as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Templates(args) => cmd_templates(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut project = Project::load(&args.project, args.config.as_deref())
        .with_context(|| format!("load project '{}'", args.project.display()))?;

    if let Some(dir) = args.ios_project {
        project = project.with_ios(dir);
    }
    if let Some(dir) = args.assets {
        project = project.with_assets_dir(dir);
    }

    let mut config = project.config().clone();
    if let Some(scale) = args.logo_splash_scale {
        config.logo_splash_scale = scale;
    }
    if let Some(color) = args.splash_color {
        config.splash_background_color = Some(color);
    }
    if let Some(color) = args.splash_color_dark {
        config.splash_background_color_dark = Some(color);
    }
    let project = project.with_config(config)?;

    let inputs = iconsmith::discover_inputs(project.assets_dir())
        .with_context(|| format!("discover inputs in '{}'", project.assets_dir().display()))?;
    if inputs.is_empty() {
        tracing::warn!(dir = %project.assets_dir().display(), "no source masters found");
    }

    let generator = IosAssetGenerator::new(
        iconsmith::Catalog::ios()?,
        GeneratorOpts {
            threads: args.threads,
        },
    )?;

    let mut outputs = Vec::new();
    for input in &inputs {
        let produced = generator
            .generate(input, &project)
            .with_context(|| format!("generate from '{}'", input.path().display()))?;
        outputs.extend(produced);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        eprintln!("wrote {} assets", outputs.len());
    }
    Ok(())
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    let catalog = iconsmith::Catalog::ios()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.templates())?);
        return Ok(());
    }
    for t in catalog.templates() {
        println!("{:<48} {:>5}x{:<5} {}", t.name, t.width, t.height, t.kind);
    }
    Ok(())
}
