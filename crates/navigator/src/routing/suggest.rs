use crate::registry::PathRegistry;

/// Keywords this short are never offered as suggestions.
const MIN_KEYWORD_CHARS: usize = 2;

/// Alternate search terms for input that did not match confidently.
///
/// A keyword qualifies when its first two chars occur in the input, or the
/// input's first two chars occur in the keyword. The loose overlap test is
/// followed by each group's representative keyword until `limit` terms exist.
/// Output keeps discovery order without duplicates, in registered casing.
pub fn suggest(registry: &PathRegistry, input: &str, limit: usize) -> Vec<String> {
    let lowered = input.to_lowercase();
    let input_prefix: String = lowered.chars().take(2).collect();

    let mut found: Vec<String> = Vec::new();
    for keyword in registry.groups().iter().flat_map(|g| g.keywords.iter()) {
        if keyword.chars().count() <= MIN_KEYWORD_CHARS {
            continue;
        }
        let keyword_lower = keyword.to_lowercase();
        let keyword_prefix: String = keyword_lower.chars().take(2).collect();
        let overlaps = lowered.contains(keyword_prefix.as_str())
            || keyword_lower.contains(input_prefix.as_str());
        if overlaps && !found.contains(keyword) {
            found.push(keyword.clone());
        }
    }

    for group in registry.groups() {
        if found.len() >= limit {
            break;
        }
        if let Some(representative) = group.representative() {
            if !found.iter().any(|existing| existing == representative) {
                found.push(representative.to_string());
            }
        }
    }

    found.truncate(limit);
    found
}
