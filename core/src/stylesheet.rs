use chrono::{DateTime, Utc};

use crate::FlatToken;

const HEADER: &str = "/* Design Tokens - Auto-generated */";

/// Element styles written after the `:root` block. Each `var()` carries its
/// own fallback so the page renders even when a token is missing.
pub const BASE_STYLES: &str = "/* Base Styles */
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
  font-family: var(--font-family-base, -apple-system, sans-serif);
  font-size: var(--font-size-base, 1rem);
  line-height: 1.5;
  color: var(--color-text, #111827);
  background-color: var(--color-background, #ffffff);
}
";

/// Renders the stylesheet. Declarations keep the order of `tokens`; values
/// are written verbatim.
pub fn emit(tokens: &[FlatToken], generated_at: &DateTime<Utc>) -> String {
    let declarations: String = tokens
        .iter()
        .map(|token| format!("  {}\n", token.to_css()))
        .collect();
    format!(
        "{HEADER}\n/* Updated: {} */\n\n:root {{\n{declarations}}}\n\n{BASE_STYLES}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
