//! Payment request URIs (`solana:<address>?amount=<amount>`).

pub const DEFAULT_SCHEME: &str = "solana";

/// Build a payment request for `address` using the `solana` scheme.
pub fn build_payment_request(address: &str, amount: Option<f64>) -> String {
    build_payment_request_with_scheme(DEFAULT_SCHEME, address, amount)
}

/// Build a payment request URI. The amount is included only when it is
/// finite and strictly positive.
pub fn build_payment_request_with_scheme(
    scheme: &str,
    address: &str,
    amount: Option<f64>,
) -> String {
    match amount.filter(|amount| amount.is_finite() && *amount > 0.0) {
        Some(amount) => format!(
            "{}:{}?amount={}",
            scheme,
            address,
            encode_uri_component(&amount.to_string())
        ),
        None => format!("{}:{}", scheme, address),
    }
}

// Same unreserved set as ECMAScript's encodeURIComponent
fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::encode_uri_component;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("1.5"), "1.5");
        assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_uri_component("x=y/z"), "x%3Dy%2Fz");
    }
}
