//! Parsing of the line-based feed configuration.
//!
//! ```text
//! https://example.com/loose.xml     -> Uncategorized
//! # Tech
//! https://blog.rust-lang.org/feed.xml
//! - https://hnrss.org/frontpage     -> bullet stripped
//! ```

/// Marker that starts a category header line.
pub const CATEGORY_MARKER: char = '#';

/// Category used for URLs that appear before any header.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub urls: Vec<String>,
}

/// Categories in first-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedCategories {
    categories: Vec<Category>,
}

impl FeedCategories {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.urls.as_slice())
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Make `name` the active category, clearing its URLs if it already exists.
    fn declare(&mut self, name: &str) -> usize {
        match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => {
                self.categories[idx].urls.clear();
                idx
            }
            None => {
                self.categories.push(Category {
                    name: name.to_string(),
                    urls: Vec::new(),
                });
                self.categories.len() - 1
            }
        }
    }
}

impl<'a> IntoIterator for &'a FeedCategories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

/// Parse feed configuration lines into categories.
///
/// A redeclared category loses the URLs collected so far and receives the
/// ones that follow its latest header.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> FeedCategories {
    let mut categories = FeedCategories::default();
    let mut active: Option<usize> = None;

    for raw in lines {
        let line = raw.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix(CATEGORY_MARKER) {
            active = Some(categories.declare(name.trim()));
            continue;
        }

        let idx = match active {
            Some(idx) => idx,
            None => {
                let idx = categories.declare(UNCATEGORIZED);
                active = Some(idx);
                idx
            }
        };
        categories.categories[idx]
            .urls
            .push(strip_bullet(line).to_string());
    }

    categories
}

/// Convenience for the persisted free-text form.
pub fn parse_text(text: &str) -> FeedCategories {
    let lines: Vec<&str> = text.lines().collect();
    parse(&lines)
}

fn strip_bullet(line: &str) -> &str {
    for bullet in ["-", "*"] {
        if let Some(rest) = line.strip_prefix(bullet) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    line
}
