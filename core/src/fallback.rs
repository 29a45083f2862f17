//! Local tokens the preview components rely on.
//!
//! These are appended after the fetched tokens, so when a name exists in both
//! places the value here is declared last and wins in the cascade.

pub type FallbackTable = [(&'static str, &'static str)];

pub const FALLBACK_TOKENS: &FallbackTable = &[
    ("color-primary", "#6366f1"),
    ("color-primary-hover", "#4f46e5"),
    ("color-secondary", "#8b5cf6"),
    ("color-success", "#10b981"),
    ("color-warning", "#f59e0b"),
    ("color-error", "#ef4444"),
    ("color-neutral-50", "#f9fafb"),
    ("color-neutral-100", "#f3f4f6"),
    ("color-neutral-200", "#e5e7eb"),
    ("color-neutral-300", "#d1d5db"),
    ("color-neutral-700", "#374151"),
    ("color-neutral-900", "#111827"),
    (
        "font-family-base",
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
    ),
    ("font-size-xs", "0.75rem"),
    ("font-size-sm", "0.875rem"),
    ("font-size-base", "1rem"),
    ("font-size-lg", "1.125rem"),
    ("font-size-xl", "1.25rem"),
    ("font-size-2xl", "1.5rem"),
    ("font-size-3xl", "1.875rem"),
    ("font-weight-normal", "400"),
    ("font-weight-medium", "500"),
    ("font-weight-semibold", "600"),
    ("font-weight-bold", "700"),
    ("spacing-xs", "0.25rem"),
    ("spacing-sm", "0.5rem"),
    ("spacing-md", "1rem"),
    ("spacing-lg", "1.5rem"),
    ("spacing-xl", "2rem"),
    ("spacing-2xl", "3rem"),
    ("radius-sm", "0.25rem"),
    ("radius-md", "0.5rem"),
    ("radius-lg", "0.75rem"),
    ("radius-xl", "1rem"),
    ("radius-full", "9999px"),
    ("shadow-sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("shadow-md", "0 4px 6px -1px rgb(0 0 0 / 0.1)"),
    ("shadow-lg", "0 10px 15px -3px rgb(0 0 0 / 0.1)"),
    ("shadow-xl", "0 20px 25px -5px rgb(0 0 0 / 0.1)"),
];
