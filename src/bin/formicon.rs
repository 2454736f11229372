use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "formicon", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize an icon set and write one PNG per size.
    Generate(GenerateArgs),
    /// List the chunks of a PNG file and check it decodes.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory; files are named `icon{size}.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Icon set config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated icon sizes.
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<i64>>,

    /// Emit RGBA instead of RGB.
    #[arg(long)]
    alpha: bool,

    /// Draw a circular marker at the left end of each field.
    #[arg(long)]
    markers: bool,

    /// Render sizes in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// PNG file to inspect.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<formicon::IconSetConfig> {
    let mut cfg = match &args.config {
        Some(path) => formicon::IconSetConfig::from_json_file(path)?,
        None => formicon::IconSetConfig::default(),
    };
    if let Some(sizes) = &args.sizes {
        cfg.sizes = sizes.clone();
    }
    cfg.alpha |= args.alpha;
    cfg.style.markers |= args.markers;
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let threading = formicon::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let (icons, stats) = formicon::render_icons(&cfg.requests(), &cfg.style, &threading)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for icon in &icons {
        let path = args
            .out_dir
            .join(formicon::icon_file_name(icon.request.size));
        formicon::write_atomic(&path, &icon.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(
            size = icon.request.size,
            bytes = icon.png.len(),
            "wrote {}",
            path.display()
        );
    }

    eprintln!(
        "wrote {} icons ({} bytes) to {}",
        stats.icons_total,
        stats.bytes_total,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = read_file(&args.in_path)?;
    let chunks = formicon::read_chunks(&bytes)?;

    let mut bad = 0usize;
    for c in &chunks {
        let ok = c.crc_matches();
        if !ok {
            bad += 1;
        }
        println!(
            "{} len={:<8} crc={:08x} {}",
            c.tag,
            c.payload.len(),
            c.stored_crc,
            if ok { "ok" } else { "MISMATCH" }
        );
    }
    if bad > 0 {
        anyhow::bail!("{bad} chunk(s) failed CRC validation");
    }

    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .with_context(|| format!("decode png '{}'", args.in_path.display()))?;
    println!(
        "decoded {}x{} {:?}",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read '{}'", path.display()))
}
