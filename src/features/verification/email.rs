use regex::Regex;

/// Syntactic check only: something, `@`, something, `.`, something, with no
/// whitespace or extra `@` anywhere. Deliverability is the server's problem.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}
