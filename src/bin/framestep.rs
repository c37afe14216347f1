use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framestep::{
    FfmpegSink, FfmpegSinkOpts, Frame, FrameIndex, Player, PlayerOpts, Program, RecordOpts,
    Sequence as _,
};

#[derive(Parser, Debug)]
#[command(name = "framestep", version)]
struct Cli {
    /// Log engine activity (stagger activations, loop iterations) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a program to the end.
    Play(PlayArgs),
    /// Render the view after a given tick as a PNG.
    Frame(FrameArgs),
    /// Record a WebM video (requires `ffmpeg` on PATH).
    Record(RecordArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input program JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pace ticks to the program's frame rate.
    #[arg(long)]
    realtime: bool,

    /// Print every tick as a JSON line on stdout.
    #[arg(long)]
    dump: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input program JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index. 0 is the initial view, `n` is the view after `n` ticks.
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RecordArgs {
    /// Input program JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output WebM path.
    #[arg(long)]
    out: PathBuf,

    /// Target video bitrate in bits per second.
    #[arg(long, default_value_t = 5_000_000)]
    bitrate: u64,

    /// Replace the output file if it exists.
    #[arg(long)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Record(args) => cmd_record(args),
    }
}

fn read_program(path: &Path) -> anyhow::Result<Program> {
    Program::from_path(path).with_context(|| format!("load program '{}'", path.display()))
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let program = read_program(&args.in_path)?;
    let inst = program.instantiate()?;
    let opts = PlayerOpts {
        fps: program.fps,
        realtime: args.realtime,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = Player::new(inst.root, opts).run_to_end(|idx: FrameIndex, frame: Frame| {
        if args.dump {
            let line = serde_json::json!({ "frame": idx.0, "value": frame });
            writeln!(out, "{line}").context("write tick")?;
        }
        Ok(())
    })?;

    eprintln!(
        "played {} frames in {:.3}s",
        stats.frames,
        stats.elapsed.as_secs_f64()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let program = read_program(&args.in_path)?;
    let mut inst = program.instantiate()?;
    for tick in 0..args.frame {
        if inst.root.pull()?.is_none() {
            anyhow::bail!(
                "frame {} is past the end of the animation ({tick} ticks)",
                args.frame
            );
        }
    }

    let frame = framestep::render_view(&inst.view)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_record(args: RecordArgs) -> anyhow::Result<()> {
    let program = read_program(&args.in_path)?;
    let inst = program.instantiate()?;

    let mut opts = FfmpegSinkOpts::new(&args.out);
    opts.overwrite = args.overwrite;
    opts.bitrate = args.bitrate;
    let mut sink = FfmpegSink::new(opts);

    let frames = framestep::record(
        &inst.view,
        inst.root,
        &mut sink,
        RecordOpts { fps: program.fps },
    )?;

    eprintln!("wrote {} ({frames} frames)", args.out.display());
    Ok(())
}
