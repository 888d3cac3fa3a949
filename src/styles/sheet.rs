//! Scoped style sheets.
//!
//! Every rule is emitted under a single scope class so the declarations only
//! reach markup rendered inside an element carrying that class.

/// Selector used for the scope element itself
pub const ROOT_SELECTOR: &str = "&";

/// Error type for style sheet construction
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    MalformedSelector(String),
    EmptyDeclaration(String),
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            StyleError::MalformedSelector(s) => write!(f, "Malformed selector: {}", s),
            StyleError::EmptyDeclaration(s) => write!(f, "Empty declaration in rule: {}", s),
        }
    }
}

impl std::error::Error for StyleError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: &'static str,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector: &'static str, declarations: Vec<Declaration>) -> Self {
        Self { selector, declarations }
    }

    /// Value of the last declaration for `property`, matching CSS cascade order
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    scope: &'static str,
    rules: Vec<StyleRule>,
}

impl StyleSheet {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Emit the sheet as CSS text with every selector prefixed by the scope class.
    ///
    /// Fails on the first rule whose selector would not match under strict
    /// parsing, rather than emitting a rule the browser silently drops.
    pub fn to_css(&self) -> Result<String, StyleError> {
        if !is_class_name(self.scope) {
            return Err(StyleError::MalformedSelector(self.scope.to_string()));
        }

        let mut css = String::new();
        for rule in &self.rules {
            validate_selector(rule.selector)?;

            let selector = if rule.selector == ROOT_SELECTOR {
                format!(".{}", self.scope)
            } else {
                format!(".{} {}", self.scope, rule.selector)
            };

            css.push_str(&selector);
            css.push_str(" {\n");
            for decl in &rule.declarations {
                if decl.property.trim().is_empty() || decl.value.trim().is_empty() {
                    return Err(StyleError::EmptyDeclaration(rule.selector.to_string()));
                }
                css.push_str(&format!("  {}: {};\n", decl.property, decl.value));
            }
            css.push_str("}\n");
        }

        log::debug!("Emitted {} rules for scope .{}", self.rules.len(), self.scope);
        Ok(css)
    }
}

/// Check that a selector is `&` or a chain of descendant class selectors.
pub fn validate_selector(selector: &str) -> Result<(), StyleError> {
    if selector == ROOT_SELECTOR {
        return Ok(());
    }

    let malformed = || StyleError::MalformedSelector(selector.to_string());

    let mut parts = selector.split_whitespace().peekable();
    if parts.peek().is_none() {
        return Err(malformed());
    }

    for part in parts {
        let name = part.strip_prefix('.').ok_or_else(malformed)?;
        if !is_class_name(name) {
            return Err(malformed());
        }
    }

    Ok(())
}

fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("&").is_ok());
        assert!(validate_selector(".article-photo").is_ok());
        assert!(validate_selector(".article-text-wrap .article-user-id").is_ok());
        assert!(validate_selector("._private").is_ok());
    }

    #[test]
    fn test_rejects_stray_quote() {
        let err = validate_selector(".article-movie-desc'").unwrap_err();
        assert_eq!(err, StyleError::MalformedSelector(".article-movie-desc'".to_string()));
    }

    #[test]
    fn test_rejects_other_malformed_selectors() {
        assert!(validate_selector("").is_err());
        assert!(validate_selector("   ").is_err());
        assert!(validate_selector("article-photo").is_err());
        assert!(validate_selector(".1col").is_err());
        assert!(validate_selector(".").is_err());
        assert!(validate_selector(".a > .b").is_err());
    }

    #[test]
    fn test_to_css_scopes_every_rule() {
        let sheet = StyleSheet::new("scope")
            .with_rule(StyleRule::new("&", vec![Declaration::new("width", "100%")]))
            .with_rule(StyleRule::new(".inner", vec![Declaration::new("color", "#000")]));

        let css = sheet.to_css().unwrap();
        assert_eq!(css, ".scope {\n  width: 100%;\n}\n.scope .inner {\n  color: #000;\n}\n");
    }

    #[test]
    fn test_to_css_fails_on_malformed_rule() {
        let sheet = StyleSheet::new("scope")
            .with_rule(StyleRule::new(".ok", vec![Declaration::new("color", "#000")]))
            .with_rule(StyleRule::new(".bad'", vec![Declaration::new("color", "#fff")]));

        assert!(matches!(sheet.to_css(), Err(StyleError::MalformedSelector(_))));
    }

    #[test]
    fn test_to_css_fails_on_empty_value() {
        let sheet = StyleSheet::new("scope")
            .with_rule(StyleRule::new(".ok", vec![Declaration::new("color", " ")]));

        assert_eq!(sheet.to_css(), Err(StyleError::EmptyDeclaration(".ok".to_string())));
    }

    #[test]
    fn test_rule_lookup() {
        let rule = StyleRule::new(
            ".a",
            vec![Declaration::new("color", "red"), Declaration::new("color", "blue")],
        );
        assert_eq!(rule.get("color"), Some("blue"));
        assert_eq!(rule.get("width"), None);

        let sheet = StyleSheet::new("scope").with_rule(rule);
        assert!(sheet.rule(".a").is_some());
        assert!(sheet.rule(".b").is_none());
    }
}
