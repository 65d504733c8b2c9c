use stratum_color::{RawColor, UnsupportedFormat};

/// Reads one command-line color argument.
///
/// A comma-separated list of numbers (optionally bracketed) becomes a numeric
/// tuple; anything else is trimmed and passed on as text for the parser to
/// classify.
pub fn parse_layer(arg: &str) -> Result<RawColor, UnsupportedFormat> {
    let trimmed = arg.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let channels: Option<Vec<f64>> = inner.split(',').map(|p| p.trim().parse::<f64>().ok()).collect();
    match channels {
        Some(channels) => RawColor::from_channels(&channels),
        None => Ok(RawColor::text(trimmed)),
    }
}

/// Splits a `|`-separated stack into its front layer and the layers beneath.
pub fn parse_stack(line: &str) -> Result<(RawColor, Vec<RawColor>), UnsupportedFormat> {
    match line.split_once('|') {
        Some((front, rest)) => {
            let back = rest.split('|').map(parse_layer).collect::<Result<Vec<_>, _>>()?;
            Ok((parse_layer(front)?, back))
        }
        None => Ok((parse_layer(line)?, Vec::new())),
    }
}
