use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use periodviz::models::period_subperiod;
use periodviz::segment::{SegmentMode, segment_with};

#[derive(Parser, Debug)]
#[command(
    name = "periodviz",
    version,
    about = "Inspect period-axis segmentation for time-series charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split period labels (YYYYMM-like) into year segments.
    Segments(SegmentsArgs),
}

#[derive(Args, Debug)]
struct SegmentsArgs {
    /// Period labels separated by comma or semicolon (e.g., 202301,202302,202401)
    labels: String,
    /// Merge groups that reappear after a different group into one segment.
    #[arg(long, default_value_t = false)]
    merge: bool,
    /// Print the segmentation as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_labels(s: &str) -> Result<Vec<i64>> {
    s.split([',', ';'])
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| {
            x.parse::<i64>()
                .with_context(|| format!("invalid period label {x:?}, expected an integer like 202401"))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Segments(args) => cmd_segments(args),
    }
}

fn cmd_segments(args: SegmentsArgs) -> Result<()> {
    let labels = parse_labels(&args.labels)?;
    let mode = if args.merge {
        SegmentMode::Merged
    } else {
        SegmentMode::Contiguous
    };
    debug!("segmenting {} labels ({:?})", labels.len(), mode);
    let seg = segment_with(&labels, mode)?;

    if args.json {
        let doc = serde_json::json!({
            "labels": seg.labels(),
            "groups": seg.groups(),
            "boundaries": seg.boundaries(),
            "anchors": seg.anchors(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let labels = seg.labels();
        for s in seg.segments() {
            println!(
                "{}  {}..{}  anchor={}  periods {:02}-{:02}",
                s.group,
                s.start,
                s.end,
                s.anchor(),
                period_subperiod(labels[s.start]),
                period_subperiod(labels[s.end - 1])
            );
        }
    }
    Ok(())
}
