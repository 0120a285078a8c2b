use regex::Regex;

use crate::core::error::YaspError;

/// The kind of statement a pattern hunts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Print,
    Todo,
    Issue,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Print => write!(f, "print"),
            Category::Todo => write!(f, "todo"),
            Category::Issue => write!(f, "issue"),
        }
    }
}

/// Builds an alternation out of a comma-separated command list.
///
/// `)` is dropped and `(` escaped so `print(` matches the start of a call.
/// Nothing else is escaped.
pub fn build_expression(commands: &str) -> String {
    commands
        .split(',')
        .map(|command| command.replace('(', "\\(").replace(')', ""))
        .collect::<Vec<_>>()
        .join("|")
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    category: Category,
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(category: Category, commands: &str) -> Result<Self, YaspError> {
        let expression = build_expression(commands);
        let regex = Regex::new(&expression).map_err(|source| YaspError::InvalidPattern {
            category,
            expression: expression.clone(),
            source,
        })?;
        tracing::debug!(%category, %expression, "compiled pattern");
        Ok(Self { category, regex })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Leftmost match in `line`, or `None` when the match is empty.
    pub fn find<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.regex
            .find(line)
            .map(|m| m.as_str())
            .filter(|matched| !matched.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_expression_joins_commands() {
        assert_eq!(build_expression("print,console.log"), "print|console.log");
    }

    #[test]
    fn test_build_expression_paren_handling() {
        assert_eq!(build_expression("print()"), "print\\(");
        assert_eq!(build_expression("fmt.Println(,log("), "fmt.Println\\(|log\\(");
    }

    #[test]
    fn test_matches_any_token() {
        let pattern = CompiledPattern::compile(Category::Print, "a,b,c").unwrap();
        assert_eq!(pattern.find("x a y"), Some("a"));
        assert_eq!(pattern.find("embedded_b_token"), Some("b"));
        assert_eq!(pattern.find("c"), Some("c"));
        assert_eq!(pattern.find("xyz"), None);
    }

    #[test]
    fn test_call_prefix_matches_literal_paren() {
        let pattern = CompiledPattern::compile(Category::Print, "print(").unwrap();
        assert_eq!(pattern.find("print(\"hello\")"), Some("print("));
        assert_eq!(pattern.find("printer = 1"), None);
    }

    #[test]
    fn test_find_returns_leftmost_match() {
        let pattern = CompiledPattern::compile(Category::Todo, "TODO,FIXME").unwrap();
        assert_eq!(pattern.find("// FIXME then TODO"), Some("FIXME"));
    }

    #[test]
    fn test_empty_commands_match_trivially() {
        assert_eq!(build_expression(""), "");
        let pattern = CompiledPattern::compile(Category::Todo, "").unwrap();
        // Zero-width matches are never reported.
        assert_eq!(pattern.find("anything"), None);
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = CompiledPattern::compile(Category::Issue, "[unclosed").unwrap_err();
        assert!(matches!(
            err,
            YaspError::InvalidPattern {
                category: Category::Issue,
                ..
            }
        ));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Print.to_string(), "print");
        assert_eq!(Category::Todo.to_string(), "todo");
        assert_eq!(Category::Issue.to_string(), "issue");
    }
}
