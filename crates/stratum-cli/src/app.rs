use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use stratum_cache::{BlendCache, CacheConfig};
use stratum_color::{blend, blend_colors, extract, AlphaMode, CanonicalColor};

use crate::batch::run_batch;
use crate::cli::{Cli, Command};
use crate::input::parse_layer;
use crate::output::render;

/// How a command finished when it did not hit a hard error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    Success,
    /// Some batch lines could not be blended; the rest were printed.
    PartialFailure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::PartialFailure => ExitCode::FAILURE,
        }
    }
}

/// Executes one parsed invocation against the given streams.
pub fn run(cli: Cli, input: impl BufRead, mut out: impl Write, diag: impl Write) -> anyhow::Result<Status> {
    let color = match cli.command {
        Command::Parse { color } => extract(parse_layer(&color)?).context("failed to parse color")?,
        Command::Blend { foreground, background } => {
            let front = parse_layer(&foreground)?;
            let back = background
                .iter()
                .map(|s| parse_layer(s))
                .collect::<Result<Vec<_>, _>>()?;
            blend_colors(front, &back).context("failed to blend colors")?
        }
        Command::Composite { source, destination, premultiplied } => {
            let mode = if premultiplied { AlphaMode::Premultiplied } else { AlphaMode::Straight };
            composite(&source, &destination, mode)?
        }
        Command::Batch { cache_capacity } => {
            let mut cache = BlendCache::new(CacheConfig { capacity: cache_capacity });
            let summary = run_batch(input, out, diag, &mut cache, cli.json)?;
            return Ok(if summary.failures > 0 { Status::PartialFailure } else { Status::Success });
        }
    };

    writeln!(out, "{}", render(color, cli.json)).context("failed to write result")?;
    Ok(Status::Success)
}

fn composite(source: &str, destination: &str, mode: AlphaMode) -> anyhow::Result<CanonicalColor> {
    let src = extract(parse_layer(source)?).context("failed to parse source color")?;
    let dst = extract(parse_layer(destination)?).context("failed to parse destination color")?;
    let out = blend(src.normalize(), dst.normalize(), mode);
    log::debug!("{src} over {dst} ({mode:?}) -> {out:?}");
    Ok(out.denormalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Runs `stratum <args>` with `stdin`, returning status, stdout, stderr.
    fn invoke(args: &[&str], stdin: &str) -> (anyhow::Result<Status>, String, String) {
        let cli = Cli::try_parse_from(std::iter::once("stratum").chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let status = run(cli, stdin.as_bytes(), &mut out, &mut diag);
        (status, String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
    }

    // ── run ───────────────────────────────────────────────────────────────

    #[test]
    fn parse_prints_canonical() {
        let (status, out, _) = invoke(&["parse", "rgba(32, 64, 87, 0.2)"], "");
        assert_eq!(status.unwrap(), Status::Success);
        assert_eq!(out, "[32, 64, 87, 0.2]\n");
    }

    #[test]
    fn parse_json() {
        let (_, out, _) = invoke(&["parse", "#3af", "--json"], "");
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["r"], 0x33);
        assert_eq!(v["b"], 0xff);
        assert_eq!(v["hex"], "#33aaffff");
    }

    #[test]
    fn parse_rejects_keyword() {
        let (status, out, _) = invoke(&["parse", "red"], "");
        let e = status.unwrap_err();
        assert!(format!("{e:#}").starts_with("failed to parse color: Expected color"));
        assert!(out.is_empty());
    }

    #[test]
    fn blend_stack_with_tuple_layer() {
        let (status, out, _) = invoke(&["blend", "rgba(255,255,255,0.5)", "[0, 0, 0]"], "");
        assert_eq!(status.unwrap(), Status::Success);
        assert_eq!(out, "[128, 128, 128, 1]\n");
    }

    #[test]
    fn blend_json() {
        let (_, out, _) = invoke(&["--json", "blend", "[255, 0, 0, 0]", "#0f0"], "");
        let v: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["g"], 255);
        assert_eq!(v["a"], 1.0);
    }

    #[test]
    fn composite_command_premultiplied() {
        let (_, out, _) = invoke(&["composite", "255,0,0,0", "#00f", "--premultiplied"], "");
        assert_eq!(out, "[255, 0, 0, 1]\n");
    }

    #[test]
    fn batch_all_lines_succeed() {
        let (status, out, diag) = invoke(&["batch"], "#fff\nrgba(0,0,0,0.5) | #fff\n");
        assert_eq!(status.unwrap(), Status::Success);
        assert_eq!(out, "[255, 255, 255, 1]\n[128, 128, 128, 1]\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn batch_with_failing_line_is_partial_failure() {
        let (status, out, diag) = invoke(&["batch", "--cache-capacity", "0", "--json"], "bogus\n#000\n");
        assert_eq!(status.unwrap(), Status::PartialFailure);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("\"hex\":\"#000000ff\""));
        assert!(diag.starts_with("line 1: "));
    }

    #[test]
    fn partial_failure_exits_non_zero() {
        assert_eq!(format!("{:?}", ExitCode::from(Status::PartialFailure)), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(format!("{:?}", ExitCode::from(Status::Success)), format!("{:?}", ExitCode::SUCCESS));
    }

    // ── composite ─────────────────────────────────────────────────────────

    #[test]
    fn composite_straight() {
        let out = composite("rgba(255,255,255,0.5)", "#000", AlphaMode::Straight).unwrap();
        assert_eq!(out, CanonicalColor::rgb(128, 128, 128));
    }

    #[test]
    fn composite_premultiplied_zero_alpha_source() {
        let out = composite("[255, 0, 0, 0]", "#00f", AlphaMode::Premultiplied).unwrap();
        assert_eq!(out, CanonicalColor::rgb(255, 0, 0));
    }

    #[test]
    fn composite_reports_bad_input() {
        let e = composite("#f00", "blue", AlphaMode::Straight).unwrap_err();
        assert!(format!("{e:#}").starts_with("failed to parse destination color: Expected color"));
    }
}
