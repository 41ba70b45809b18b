use anyhow::{Result, bail};
use rand::Rng;

/// Resolve a CLI seed token into a numeric seed.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hex. Without a token a fresh seed is drawn from entropy.
pub fn resolve_seed(token: Option<&str>) -> Result<u64> {
    let Some(token) = token.map(str::trim) else {
        return Ok(rand::thread_rng().r#gen());
    };

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }

    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        && let Ok(value) = u64::from_str_radix(hex, 16)
    {
        return Ok(value);
    }

    bail!("Unrecognized seed token: {token}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numeric_tokens() {
        assert_eq!(resolve_seed(Some("42")).unwrap(), 42);
        assert_eq!(resolve_seed(Some("-7")).unwrap(), 7);
        assert_eq!(resolve_seed(Some("18446744073709551615")).unwrap(), u64::MAX);
        assert_eq!(resolve_seed(Some(" 1337 ")).unwrap(), 1337);
    }

    #[test]
    fn resolves_hex_tokens() {
        assert_eq!(resolve_seed(Some("0xACED")).unwrap(), 0xACED);
        assert_eq!(resolve_seed(Some("0Xff")).unwrap(), 255);
    }

    #[test]
    fn rejects_garbage() {
        let err = resolve_seed(Some("ORANGE42")).unwrap_err();
        assert!(err.to_string().contains("ORANGE42"));
        assert!(resolve_seed(Some("0xZZ")).is_err());
    }

    #[test]
    fn missing_token_draws_a_seed() {
        assert!(resolve_seed(None).is_ok());
    }
}
