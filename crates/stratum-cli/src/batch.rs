use std::io::{BufRead, Write};

use anyhow::Context;
use stratum_cache::BlendCache;

use crate::input::parse_stack;
use crate::output::render;

/// Outcome of a batch run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub stacks: usize,
    pub failures: usize,
}

/// Blends one stack per non-empty input line.
///
/// Results go to `out` in input order. A line that is not UTF-8 or fails to
/// parse is reported on `diag` and skipped; only I/O errors abort the run.
pub fn run_batch(
    input: impl BufRead,
    mut out: impl Write,
    mut diag: impl Write,
    cache: &mut BlendCache,
    json: bool,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, line) in input.split(b'\n').enumerate() {
        let line = line.context("failed to read input line")?;
        let lineno = idx + 1;

        let line = match String::from_utf8(line) {
            Ok(line) => line,
            Err(e) => {
                summary.stacks += 1;
                summary.failures += 1;
                log::warn!("line {lineno}: {e}");
                writeln!(diag, "line {lineno}: not valid UTF-8").context("failed to write diagnostic")?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        summary.stacks += 1;

        let result = parse_stack(&line).and_then(|(front, back)| cache.get_or_blend(front, &back));

        match result {
            Ok(color) => writeln!(out, "{}", render(color, json)).context("failed to write result")?,
            Err(e) => {
                summary.failures += 1;
                log::warn!("line {lineno}: unsupported color format: {}", e.input());
                writeln!(diag, "line {lineno}: {e}").context("failed to write diagnostic")?;
            }
        }
    }

    let stats = cache.stats();
    log::debug!(
        "batch done: {} stacks, {} failed; cache hits={} misses={} evictions={}",
        summary.stacks,
        summary.failures,
        stats.hits,
        stats.misses,
        stats.evictions
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_cache::CacheConfig;

    fn run(input: &str) -> (BatchSummary, String, String, BlendCache) {
        run_bytes(input.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> (BatchSummary, String, String, BlendCache) {
        let mut cache = BlendCache::new(CacheConfig { capacity: 16 });
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let summary = run_batch(input, &mut out, &mut diag, &mut cache, false).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            cache,
        )
    }

    #[test]
    fn one_result_per_line() {
        let (summary, out, diag, _) = run("#ffffff80 | #000\n\n#f00|bogus\n");
        assert_eq!(summary, BatchSummary { stacks: 2, failures: 0 });
        assert_eq!(out, "[128, 128, 128, 1]\n[255, 0, 0, 1]\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn failures_are_reported_and_skipped() {
        let (summary, out, diag, _) = run("red | #000\n255,0,0\n");
        assert_eq!(summary, BatchSummary { stacks: 2, failures: 1 });
        assert_eq!(out, "[255, 0, 0, 1]\n");
        assert!(diag.starts_with("line 1: Expected color to be in a supported format, actual: red."));
    }

    #[test]
    fn repeated_lines_hit_the_cache() {
        let (_, out, _, cache) = run("rgba(0,0,0,0.5)|#fff\nrgba(0, 0, 0, 0.5) | 255,255,255\n");
        assert_eq!(out, "[128, 128, 128, 1]\n[128, 128, 128, 1]\n");
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let (summary, out, diag, _) = run_bytes(b"#fff\n\xff\xfe\n#000\n");
        assert_eq!(summary, BatchSummary { stacks: 3, failures: 1 });
        assert_eq!(out, "[255, 255, 255, 1]\n[0, 0, 0, 1]\n");
        assert_eq!(diag, "line 2: not valid UTF-8\n");
    }

    #[test]
    fn crlf_line_endings() {
        let (summary, out, _, _) = run("#fff\r\n#000 | #fff\r\n");
        assert_eq!(summary, BatchSummary { stacks: 2, failures: 0 });
        assert_eq!(out, "[255, 255, 255, 1]\n[0, 0, 0, 1]\n");
    }
}
