use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url that can carry a path
pub fn check_http_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("'{value}' is not a valid url: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("'{value}' must use http or https."));
    }
    if url.cannot_be_a_base() {
        return Err(format!("'{value}' cannot be used as a base url."));
    }
    Ok(url)
}

/// # Errors
///
/// Will return `Err` if the value is not a positive integer
pub fn check_at_least_one(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1.".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("'{value}' is not a number: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        assert!(check_http_url("https://api.challonge.com/v1/tournaments").is_ok());
        assert!(check_http_url("http://127.0.0.1:9000/").is_ok());
        assert!(check_http_url("ftp://example.com/x").is_err());
        assert!(check_http_url("mailto:someone@example.com").is_err());
        assert!(check_http_url("not a url").is_err());
    }

    #[test]
    fn positive_counts() {
        assert_eq!(check_at_least_one("6"), Ok(6));
        assert!(check_at_least_one("0").is_err());
        assert!(check_at_least_one("-1").is_err());
    }
}
