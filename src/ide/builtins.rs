//! Built-in function registry.
//!
//! Identifiers matching these names (case-insensitively) get function-call
//! styling when followed by `(`. The sets track the runtime's registered
//! scalar and aggregate functions.

use indexmap::IndexSet;
use std::sync::LazyLock;

static SCALAR_FUNCTIONS: LazyLock<IndexSet<&'static str>> = LazyLock::new(|| {
    [
        "abs",
        "base64",
        "bucket",
        "ceil",
        "cidr_match",
        "coalesce",
        "compare",
        "date_part",
        "fields",
        "flatten",
        "floor",
        "grep",
        "grok",
        "has",
        "has_error",
        "hex",
        "is_error",
        "join",
        "kind",
        "ksuid",
        "len",
        "length",
        "levenshtein",
        "log",
        "lower",
        "max",
        "min",
        "missing",
        "nameof",
        "nest_dotted",
        "network_of",
        "now",
        "nullif",
        "parse_sup",
        "parse_uri",
        "position",
        "pow",
        "quiet",
        "regexp",
        "regexp_replace",
        "replace",
        "round",
        "split",
        "sqrt",
        "strftime",
        "trim",
        "typename",
        "typeof",
        "under",
        "unflatten",
        "upper",
    ]
    .into_iter()
    .collect()
});

/// `count`, `fuse`, `union`, `and`, `or` are aggregate functions too, but
/// those lex as keywords and never reach identifier classification.
static AGGREGATE_FUNCTIONS: LazyLock<IndexSet<&'static str>> = LazyLock::new(|| {
    ["any", "avg", "dcount", "sum", "collect", "collect_map"]
        .into_iter()
        .collect()
});

pub fn is_builtin_function(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SCALAR_FUNCTIONS.contains(lower.as_str()) || AGGREGATE_FUNCTIONS.contains(lower.as_str())
}

pub fn scalar_functions() -> impl Iterator<Item = &'static str> {
    SCALAR_FUNCTIONS.iter().copied()
}

pub fn aggregate_functions() -> impl Iterator<Item = &'static str> {
    AGGREGATE_FUNCTIONS.iter().copied()
}
