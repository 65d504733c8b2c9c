use stratum_color::CanonicalColor;

/// Formats a result for stdout: `[r, g, b, a]`, or a JSON object.
pub fn render(color: CanonicalColor, json: bool) -> String {
    if json {
        serde_json::json!({
            "r": color.r,
            "g": color.g,
            "b": color.b,
            "a": color.a,
            "hex": color.to_hex(),
        })
        .to_string()
    } else {
        color.to_string()
    }
}
