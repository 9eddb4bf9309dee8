//! Command-line parameter parsing.

use anyhow::Context;
use datagen_core::ParameterBag;

/// Parse a `key=value` parameter.
///
/// Only the first `=` separates key and value, so values may contain `=`.
/// The key is trimmed and must not be empty; the value is kept verbatim.
pub fn parse_param(s: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("Invalid parameter '{s}': expected KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Invalid parameter '{s}': empty key");
    }

    Ok((key.to_string(), value.to_string()))
}

/// Collect `key=value` parameters into a bag, rejecting repeated keys.
pub fn parse_params<S: AsRef<str>>(params: &[S]) -> anyhow::Result<ParameterBag> {
    let mut bag = ParameterBag::new();
    for param in params {
        let (key, value) = parse_param(param.as_ref())?;
        if bag.contains_key(&key) {
            anyhow::bail!("Parameter '{key}' given more than once");
        }
        bag.insert(key, value);
    }
    Ok(bag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("min=5").unwrap(),
            ("min".to_string(), "5".to_string())
        );
        assert_eq!(
            parse_param(" format =%Y=%m").unwrap(),
            ("format".to_string(), "%Y=%m".to_string())
        );
        assert_eq!(
            parse_param("separator=").unwrap(),
            ("separator".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_param_errors() {
        assert!(parse_param("min").is_err());
        assert!(parse_param("=5").is_err());
    }

    #[test]
    fn test_parse_params_rejects_repeats() {
        let bag = parse_params(&["min=1", "max=2"]).unwrap();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag["max"], "2");

        assert!(parse_params(&["min=1", "min=2"]).is_err());
    }
}
