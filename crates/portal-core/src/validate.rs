//! Field-level checks pages run before submitting.
//!
//! Each returns the message to show under the field, or `None`.

pub fn required(value: &str, label: &str) -> Option<String> {
    value
        .trim()
        .is_empty()
        .then(|| format!("{} is required", label))
}

pub fn email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return required(value, "Email");
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };
    (!valid).then(|| "Enter a valid email address".to_string())
}

pub fn min_length(value: &str, min: usize, label: &str) -> Option<String> {
    (value.chars().count() < min).then(|| format!("{} must be at least {} characters", label, min))
}

pub fn matching(value: &str, confirm: &str) -> Option<String> {
    (value != confirm).then(|| "Passwords do not match".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(required("  ", "Name").as_deref(), Some("Name is required"));
        assert_eq!(required("Ada", "Name"), None);
    }

    #[test]
    fn email_shapes() {
        assert_eq!(email("ada@example.com"), None);
        assert_eq!(email("").as_deref(), Some("Email is required"));
        assert!(email("ada").is_some());
        assert!(email("@example.com").is_some());
        assert!(email("ada@example").is_some());
        assert!(email("ada@@example.com").is_some());
    }

    #[test]
    fn min_length_counts_chars() {
        assert!(min_length("short", 8, "Password").is_some());
        assert_eq!(min_length("longenough", 8, "Password"), None);
    }

    #[test]
    fn matching_passwords() {
        assert_eq!(matching("a", "a"), None);
        assert_eq!(matching("a", "b").as_deref(), Some("Passwords do not match"));
    }
}
