//! Masking helpers for values that end up in logs

/// Mask an email address for logging, keeping the first character of the
/// local part and the whole domain: `ana@x.com` becomes `a***@x.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@x.com"), "a***@x.com");
        assert_eq!(mask_email("@x.com"), "***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("élodie@x.fr"), "é***@x.fr");
    }
}
