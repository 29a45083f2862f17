use crate::{FallbackTable, FlatToken};

/// Fetched tokens first, then the fallback table in its declared order.
/// Duplicate names are kept; the later declaration wins in CSS.
pub fn merge(remote: Vec<FlatToken>, fallback: &FallbackTable) -> Vec<FlatToken> {
    remote
        .into_iter()
        .chain(
            fallback
                .iter()
                .map(|(name, value)| FlatToken::new(*name, *value)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FALLBACK_TOKENS;

    #[test]
    fn remote_entries_come_first() {
        let remote = vec![FlatToken::new("z-last", "1"), FlatToken::new("a-first", "2")];
        let merged = merge(remote.clone(), FALLBACK_TOKENS);
        assert_eq!(merged.len(), remote.len() + FALLBACK_TOKENS.len());
        assert_eq!(&merged[..2], &remote[..]);
        assert_eq!(merged[2], FlatToken::new("color-primary", "#6366f1"));
    }

    #[test]
    fn collisions_are_not_deduplicated() {
        let merged = merge(vec![FlatToken::new("color-primary", "#000")], FALLBACK_TOKENS);
        let values: Vec<_> = merged
            .iter()
            .filter(|token| token.name == "color-primary")
            .map(|token| token.value.as_str())
            .collect();
        assert_eq!(values, ["#000", "#6366f1"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(merge(Vec::new(), &[]).is_empty());
        assert_eq!(
            merge(Vec::new(), &[("only", "x")]),
            vec![FlatToken::new("only", "x")]
        );
    }
}
