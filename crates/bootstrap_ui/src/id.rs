//! Process-wide element id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::logging;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Returns an id of the form `{prefix}-{n}` that is never handed out twice
/// within the current process.
pub fn generate_unique_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Uses the caller-supplied id when present, otherwise generates one.
///
/// An explicit id is kept verbatim, even when empty.
pub(crate) fn resolve_id(id: Option<String>, prefix: &str) -> String {
    match id {
        Some(id) => {
            if id.is_empty() {
                logging::debug_warn!("empty {prefix} id supplied; the element will not be addressable");
            }
            id
        }
        None => generate_unique_id(prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_never_repeat() {
        let first = generate_unique_id("button");
        let second = generate_unique_id("button");
        assert!(first.starts_with("button-"));
        assert!(second.starts_with("button-"));
        assert_ne!(first, second);
    }

    #[test]
    fn explicit_id_wins_over_generated() {
        assert_eq!(resolve_id(Some("save".to_string()), "button"), "save");
    }

    #[test]
    fn missing_id_is_generated() {
        assert!(resolve_id(None, "nav-link").starts_with("nav-link-"));
    }

    #[test]
    fn explicit_empty_id_is_kept() {
        assert_eq!(resolve_id(Some(String::new()), "input"), "");
    }
}
