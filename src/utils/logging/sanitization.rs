//! Secret redaction for log output
//!
//! The Gemini key travels inside the request URL, so anything that logs a
//! URL or an error string goes through here first.

const REDACTED: &str = "***REDACTED***";

/// Mask a secret for display: `ab***yz` for long values, `***` otherwise
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}

/// Replace every occurrence of `secret` in `text` with its masked form
pub fn redact_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    text.replace(secret, &mask_secret(secret))
}

/// Redact `key=`/`api_key=`/`token=` style values from free-form text
pub fn sanitize_log_data(data: &str) -> String {
    let sensitive_patterns = [
        r"(?i)(api[_-]?key|key)=([^&\s]+)",
        r"(?i)(token|secret|password)[=:]\s*([^&\s,]+)",
    ];

    let mut sanitized = data.to_string();
    for pattern in &sensitive_patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            sanitized = re
                .replace_all(&sanitized, |caps: &regex::Captures| {
                    format!("{}={}", &caps[1], REDACTED)
                })
                .to_string();
        }
    }

    sanitized
}
