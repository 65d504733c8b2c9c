use stratum_color::{extract, CanonicalColor, RawColor};

/// Structural identity of one layer in a stack.
///
/// Inputs that parse are keyed by their canonical value, so `#fff`,
/// `rgb(255,255,255)` and `[255, 255, 255]` collapse onto one key. Inputs that
/// do not parse keep their textual rendering.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum LayerKey {
    Color { rgb: [u8; 3], alpha_bits: u64 },
    Unparsed(String),
}

impl LayerKey {
    pub fn new(raw: &RawColor) -> Self {
        match extract(raw) {
            Ok(c) => Self::from_canonical(c),
            Err(_) => LayerKey::Unparsed(raw.to_string()),
        }
    }

    #[inline]
    pub fn from_canonical(c: CanonicalColor) -> Self {
        // Fold -0.0 onto 0.0; they compare equal and must hash equal.
        let a = if c.a == 0.0 { 0.0 } else { c.a };
        LayerKey::Color { rgb: [c.r, c.g, c.b], alpha_bits: a.to_bits() }
    }
}

/// Ordered front-to-back key for a whole stack.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct StackKey(Vec<LayerKey>);

impl StackKey {
    pub fn new(foreground: &RawColor, background: &[RawColor]) -> Self {
        let mut layers = Vec::with_capacity(background.len() + 1);
        layers.push(LayerKey::new(foreground));
        layers.extend(background.iter().map(LayerKey::new));
        Self(layers)
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
