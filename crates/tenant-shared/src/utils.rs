//! Utility functions

/// Lowercase and drop every whitespace character.
pub fn normalize_subdomain(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Mask a secret for log output, keeping only the first two characters.
pub fn mask_secret(secret: &str) -> String {
    let mut chars = secret.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if secret.chars().count() > 4 => format!("{}{}***", a, b),
        _ => "***".to_string(),
    }
}
