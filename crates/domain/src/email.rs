//! Syntactic email address check.
//!
//! Deliberately shallow: no DNS lookup, no quoted local parts, no IP-literal
//! domains. Enough to reject obvious typos at registration time.

/// Return `true` when `address` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid(address: &str) -> bool {
    if address.is_empty() || address.len() > 254 || address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}
