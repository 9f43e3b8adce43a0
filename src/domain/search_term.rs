use super::ValidationError;

/// A non-blank free-text term matched against member names.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(term: Option<String>) -> Result<Self, ValidationError> {
        match term {
            Some(term) if !term.trim().is_empty() => Ok(Self(term)),
            _ => Err(ValidationError::new(
                "Search term cannot be empty".to_string(),
            )),
        }
    }

    /// `LIKE` pattern matching the term anywhere in the value.
    pub fn as_like_pattern(&self) -> String {
        format!("%{}%", self.0)
    }

    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl AsRef<String> for SearchTerm {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_search_terms() {
    let valid_terms = ["a", "Asha", " sh "];
    for valid_term in valid_terms.iter() {
        let parsed = SearchTerm::parse(Some(valid_term.to_string()))
            .expect("Failed to parse valid search term");
        assert_eq!(parsed.as_ref(), valid_term);
    }
}

#[test]
fn test_empty_search_terms() {
    let test_cases = [None, Some("".to_string()), Some("   ".to_string())];
    for test_case in test_cases {
        let result = SearchTerm::parse(test_case.clone());
        assert!(result.is_err(), "Should reject {:?}", test_case);
        assert_eq!(result.unwrap_err().as_ref(), "Search term cannot be empty");
    }
}

#[test]
fn test_search_term_matching_ignores_case() {
    let term = SearchTerm::parse(Some("sHa".to_string())).unwrap();
    assert_eq!(term.as_like_pattern(), "%sHa%");
    assert!(term.matches("Asha"));
    assert!(term.matches("SHANTI"));
    assert!(!term.matches("Priya"));
}
