use std::collections::HashSet;

/// Slug used when a heading's text contains nothing sluggable.
pub const FALLBACK_SLUG: &str = "heading";

/// Unique slug generator scoped to a single document pass.
///
/// Every call to [`Slugger::next_slug`] returns a slug that has not been
/// handed out by this slugger before. Collisions are resolved by appending
/// `-1`, `-2`, ... to the base slug, restarting the search at `-1` for every
/// request.
#[derive(Debug, Default)]
pub struct Slugger {
    used: HashSet<String>,
}

impl Slugger {
    /// Creates a new slugger with an empty used-slug set.
    pub fn new() -> Self {
        Self {
            used: HashSet::new(),
        }
    }

    /// Generates the next unique slug for the given heading text.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        let mut suffix = 1usize;

        while self.used.contains(&slug) {
            slug = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.used.insert(slug.clone());
        slug
    }
}

/// Transforms arbitrary text into a lowercase, hyphen-separated token.
///
/// 1. Lowercase
/// 2. `_` becomes `-`, `@` becomes `-at-`
/// 3. Drop everything that is not a letter, digit, hyphen or whitespace
/// 4. Collapse runs of hyphens/whitespace into one hyphen
/// 5. Trim leading and trailing hyphens
///
/// Unicode letters and digits are kept as-is (lowercased where possible).
///
/// ```
/// use htoc_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("snake_case names"), "snake-case-names");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        match ch {
            '@' => {
                pending_separator |= !slug.is_empty();
                push_word(&mut slug, &mut pending_separator, "at".chars());
                pending_separator = true;
            }
            '-' | '_' => pending_separator |= !slug.is_empty(),
            c if c.is_whitespace() => pending_separator |= !slug.is_empty(),
            c if c.is_alphanumeric() => {
                push_word(&mut slug, &mut pending_separator, c.to_lowercase());
            }
            // Punctuation, symbols and emoji are dropped without leaving a separator
            _ => {}
        }
    }

    if slug.is_empty() {
        slug.push_str(FALLBACK_SLUG);
    }

    slug
}

fn push_word(slug: &mut String, pending_separator: &mut bool, chars: impl Iterator<Item = char>) {
    if *pending_separator {
        slug.push('-');
        *pending_separator = false;
    }
    slug.extend(chars);
}
