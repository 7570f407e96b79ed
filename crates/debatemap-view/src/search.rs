//! Search query parsing and matching

use debatemap_domain::Statement;

/// Split a query into lowercase search terms
///
/// Terms are separated by whitespace; a double-quoted run forms a single term.
/// An unterminated quote extends to the end of the query.
///
/// # Examples
///
/// ```
/// use debatemap_view::parse_terms;
///
/// assert_eq!(parse_terms(r#"Tax "public schools" "#), vec!["tax", "public schools"]);
/// assert!(parse_terms("   ").is_empty());
/// ```
pub fn parse_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in query.chars() {
        match c {
            '"' => {
                push_term(&mut terms, &mut current);
                quoted = !quoted;
            }
            c if c.is_whitespace() && !quoted => push_term(&mut terms, &mut current),
            c => current.push(c),
        }
    }
    push_term(&mut terms, &mut current);
    terms
}

fn push_term(terms: &mut Vec<String>, current: &mut String) {
    let term = current.trim();
    if !term.is_empty() {
        terms.push(term.to_lowercase());
    }
    current.clear();
}

/// Whether any term is a case-insensitive substring of the title or body
///
/// `terms` must already be lowercase (as returned by [`parse_terms`]). An
/// empty term list never matches.
pub fn matches_terms(statement: &Statement, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let title = statement.title.to_lowercase();
    let body = statement.body.as_deref().unwrap_or("").to_lowercase();
    terms
        .iter()
        .any(|term| title.contains(term.as_str()) || body.contains(term.as_str()))
}
