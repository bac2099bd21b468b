//! Utility-class rewrites for `className` string literals.

use once_cell::sync::Lazy;
use regex::Regex;

pub const CLASS_NAME: &str = "className";

static SPACE_X: Lazy<Regex> = Lazy::new(|| Regex::new(r"space-x-\d+").unwrap());
static SPACE_Y: Lazy<Regex> = Lazy::new(|| Regex::new(r"space-y-\d+").unwrap());
static SPACE_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"space(?:-x|-y)?-(\d+)").unwrap());

/// Native layouts have no `space-*` utilities: spacing becomes `gap-*` and the
/// axis it implied becomes an explicit flex direction.
///
/// Returns `None` when nothing in the value needs rewriting.
pub fn rewrite_spacing(value: &str) -> Option<String> {
    let mut extra: Vec<&str> = vec![];
    let mut needs_flex = false;
    let has_flex = value.split_whitespace().any(|t| t == "flex");

    if SPACE_X.is_match(value) {
        extra.push("flex-row");
        needs_flex = !has_flex;
        if needs_flex {
            extra.push("flex");
        }
    }
    if SPACE_Y.is_match(value) {
        extra.push("flex-col");
        if !has_flex && !needs_flex {
            extra.push("flex");
        }
    }

    let replaced = SPACE_ANY.replace_all(value, "gap-$1");
    if extra.is_empty() && replaced == value {
        return None;
    }
    if extra.is_empty() {
        return Some(replaced.into_owned());
    }
    Some(format!("{} {}", replaced, extra.join(" ")).trim().to_string())
}

/// Appends `forced` after an existing literal value.
pub fn append_tokens(existing: Option<&str>, forced: &str) -> String {
    match existing {
        Some(v) => format!("{v} {forced}").trim().to_string(),
        None => forced.to_string(),
    }
}
