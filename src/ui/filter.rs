use crate::ui::{Display, ElementId, Surface};

pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(query)
}

/// Show the items of `container` whose name contains `raw_query`, hide the rest.
///
/// Works only on rendered items; children without a stored name, such as an
/// error message, are left alone. Returns how many items are visible.
pub fn apply_filter<S: Surface + ?Sized>(surface: &mut S, container: ElementId, raw_query: &str) -> usize {
    let query = normalize_query(raw_query);
    let mut visible = 0;

    for item in surface.children(container) {
        let Some(name) = surface.item_name(item) else {
            continue;
        };
        if matches(&name, &query) {
            surface.set_display(item, Display::Flex);
            visible += 1;
        } else {
            surface.set_display(item, Display::Hidden);
        }
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_lowercased_and_trimmed() {
        assert_eq!(normalize_query("  EaR \t"), "ear");
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(matches("Earth", "ear"));
        assert!(matches("Earth", ""));
        assert!(!matches("Mars", "ear"));
        assert!(matches("Jupiter", "pit"));
    }
}
