use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use design_tokens_fetch_core::{emit, merge, DesignTokens, FallbackTable};
use tracing::info;

use crate::{config::TokenSource, source, writer::write_stylesheet, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub remote_tokens: usize,
    pub fallback_tokens: usize,
    pub output: PathBuf,
}

/// Fetch, flatten, merge, emit, write. Nothing is written unless every
/// earlier step succeeded.
pub fn run(
    source: &TokenSource,
    fallback: &FallbackTable,
    output: &Path,
    generated_at: DateTime<Utc>,
) -> Result<RunSummary, Error> {
    let text = source::fetch(source)?;
    let tokens = DesignTokens::parse(&text)?;
    info!(categories = tokens.categories(), "parsed tokens");

    let remote = tokens.flatten();
    let remote_tokens = remote.len();
    let css = emit(&merge(remote, fallback), &generated_at);

    write_stylesheet(output, &css)?;
    info!(
        remote = remote_tokens,
        fallback = fallback.len(),
        output = %output.display(),
        "wrote stylesheet"
    );
    Ok(RunSummary {
        remote_tokens,
        fallback_tokens: fallback.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use design_tokens_fetch_core::FALLBACK_TOKENS;
    use std::fs;

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, second).unwrap()
    }

    fn setup(document: &str) -> (tempfile::TempDir, TokenSource, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        fs::write(&input, document).unwrap();
        let output = dir.path().join("design-tokens.css");
        (dir, TokenSource::File(input), output)
    }

    #[test]
    fn writes_remote_then_fallback_tokens() {
        let (_dir, source, output) =
            setup(r##"{"spacing":{"sm":{"value":"0.5rem"}},"color":{"text":"#111827"}}"##);
        let summary = run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                remote_tokens: 2,
                fallback_tokens: FALLBACK_TOKENS.len(),
                output: output.clone(),
            }
        );

        let css = fs::read_to_string(&output).unwrap();
        let declarations: Vec<_> = css.lines().filter(|l| l.starts_with("  --")).collect();
        assert_eq!(declarations[0], "  --spacing-sm: 0.5rem;");
        assert_eq!(declarations[1], "  --color-text: #111827;");
        assert_eq!(declarations[2], "  --color-primary: #6366f1;");
        assert_eq!(css.matches("--color-text: #111827;").count(), 1);
    }

    #[test]
    fn fallback_is_declared_after_a_colliding_remote_token() {
        let (_dir, source, output) = setup(r##"{"color": {"primary": "#000"}}"##);
        run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap();
        let css = fs::read_to_string(&output).unwrap();
        let remote = css.find("--color-primary: #000;").unwrap();
        let fallback = css.find("--color-primary: #6366f1;").unwrap();
        assert!(remote < fallback);
    }

    #[test]
    fn reruns_differ_only_in_the_timestamp() {
        let (_dir, source, output) = setup(r#"{"a": {"b": 1, "c": 2}, "d": 3}"#);
        run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        run(&source, FALLBACK_TOKENS, &output, at(1)).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        let without_stamp = |css: &str| {
            css.lines()
                .filter(|l| !l.starts_with("/* Updated:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_ne!(first, second);
        assert_eq!(without_stamp(&first), without_stamp(&second));

        run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), first);
    }

    #[test]
    fn malformed_json_leaves_output_untouched() {
        let (_dir, source, output) = setup("{not valid");
        fs::write(&output, "previous").unwrap();
        let err = run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("design-tokens.css");
        let source = TokenSource::File(dir.path().join("absent.json"));
        let err = run(&source, FALLBACK_TOKENS, &output, at(0)).unwrap_err();
        assert!(matches!(err, Error::Retrieval(_)));
        assert!(!output.exists());
    }

    #[test]
    fn custom_fallback_table() {
        let (_dir, source, output) = setup(r#"{"gap": "2px"}"#);
        let summary = run(&source, &[("gap", "4px")], &output, at(0)).unwrap();
        assert_eq!(summary.fallback_tokens, 1);
        let css = fs::read_to_string(&output).unwrap();
        assert!(css.contains(":root {\n  --gap: 2px;\n  --gap: 4px;\n}\n"));
    }
}
