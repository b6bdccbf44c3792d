//! Known snippet categories and their highlighter languages.

use std::fmt;
use std::str::FromStr;

/// Category offered by the share form.
///
/// The store accepts any category string; this list only drives the
/// category listing and the optional strict validation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Javascript,
    Typescript,
    Python,
    Java,
    Cpp,
    Html,
    Css,
    React,
    Nodejs,
    Php,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Javascript,
        Category::Typescript,
        Category::Python,
        Category::Java,
        Category::Cpp,
        Category::Html,
        Category::Css,
        Category::React,
        Category::Nodejs,
        Category::Php,
    ];

    /// Value stored in the snippet record.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Javascript => "javascript",
            Category::Typescript => "typescript",
            Category::Python => "python",
            Category::Java => "java",
            Category::Cpp => "cpp",
            Category::Html => "html",
            Category::Css => "css",
            Category::React => "react",
            Category::Nodejs => "nodejs",
            Category::Php => "php",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Javascript => "JavaScript",
            Category::Typescript => "TypeScript",
            Category::Python => "Python",
            Category::Java => "Java",
            Category::Cpp => "C++",
            Category::Html => "HTML",
            Category::Css => "CSS",
            Category::React => "React",
            Category::Nodejs => "Node.js",
            Category::Php => "PHP",
        }
    }

    /// Language name understood by the syntax highlighter.
    pub fn language(self) -> &'static str {
        match self {
            Category::React => "jsx",
            Category::Nodejs => "javascript",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Highlighter language for a stored category; `"text"` when unknown.
pub fn highlight_language(category: &str) -> &'static str {
    category
        .parse::<Category>()
        .map(Category::language)
        .unwrap_or("text")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_value() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("rust".parse::<Category>().is_err());
        assert!("Python".parse::<Category>().is_err());
    }

    #[test]
    fn maps_languages() {
        assert_eq!(highlight_language("react"), "jsx");
        assert_eq!(highlight_language("nodejs"), "javascript");
        assert_eq!(highlight_language("cpp"), "cpp");
        assert_eq!(highlight_language("cobol"), "text");
    }
}
