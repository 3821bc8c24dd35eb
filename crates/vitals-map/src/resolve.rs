//! Column resolution.

use vitals_model::{ColumnMapping, Metric};

use crate::patterns::{Alias, aliases_for};
use crate::utils::normalize_text;

/// Source column with its comparison key.
struct Candidate<'a> {
    original: &'a str,
    normalized: String,
}

/// Builds the normalized lookup, keeping the first column per key.
fn candidates<S: AsRef<str>>(columns: &[S]) -> Vec<Candidate<'_>> {
    let mut out: Vec<Candidate<'_>> = Vec::with_capacity(columns.len());
    for column in columns {
        let original = column.as_ref();
        let normalized = normalize_text(original);
        if normalized.is_empty() || out.iter().any(|c| c.normalized == normalized) {
            continue;
        }
        out.push(Candidate {
            original,
            normalized,
        });
    }
    out
}

/// Resolves the source column for a list of aliases.
///
/// Exact matches are tried first, alias by alias. Only when no literal
/// alias equals a column does the containment pass run: for each alias in
/// order, the first column containing it (or matching it, for patterns)
/// wins.
pub fn resolve_column<'a, S: AsRef<str>>(columns: &'a [S], aliases: &[Alias]) -> Option<&'a str> {
    let lookup = candidates(columns);

    for alias in aliases {
        if let Alias::Literal(token) = alias {
            let key = normalize_text(token);
            if let Some(hit) = lookup.iter().find(|c| c.normalized == key) {
                return Some(hit.original);
            }
        }
    }

    for alias in aliases {
        let hit = match alias {
            Alias::Literal(token) => {
                let key = normalize_text(token);
                lookup.iter().find(|c| c.normalized.contains(&key))
            }
            Alias::Pattern(regex) => lookup.iter().find(|c| regex.is_match(&c.normalized)),
        };
        if let Some(hit) = hit {
            return Some(hit.original);
        }
    }

    None
}

/// Resolves every canonical metric against the table's columns.
///
/// Metrics resolve independently, so one source column may serve more
/// than one metric when the headers are ambiguous.
pub fn build_column_mapping<S: AsRef<str>>(columns: &[S]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for metric in Metric::ALL {
        if let Some(column) = resolve_column(columns, aliases_for(metric)) {
            mapping.insert(metric, column);
        }
    }

    let unmapped = mapping.unmapped();
    if !unmapped.is_empty() {
        tracing::debug!(?unmapped, "metrics without a matching column");
    }
    mapping
}
