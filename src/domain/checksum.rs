/// Digest of a string used so the literal password is never stored.
/// Not a security primitive: collisions are easy to find.
///
/// Matches the digest used by existing backups: wrapping 32-bit
/// `h = (h << 5) - h + c` over UTF-16 code units, rendered in base 36.
pub fn checksum(input: &str) -> String {
    let mut hash: i32 = 0;
    for unit in input.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut remaining = i64::from(value).unsigned_abs();
    let mut out: Vec<char> = Vec::new();

    while remaining > 0 {
        out.push(char::from(DIGITS[(remaining % 36) as usize]));
        remaining /= 36;
    }
    if value < 0 {
        out.push('-');
    }

    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(checksum("password"), "k4k87v");
        assert_eq!(checksum("hunter2"), "kxnp9u");
        assert_eq!(checksum("a"), "2p");
        assert_eq!(checksum("0000"), "vo5c");
    }

    #[test]
    fn test_negative_hash_renders_with_sign() {
        assert_eq!(checksum("secret"), "-ezknyo");
        assert_eq!(checksum("correct horse"), "-wyv2ah");
    }

    #[test]
    fn test_empty_string_is_zero() {
        assert_eq!(checksum(""), "0");
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(checksum("日記"), "i383");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(checksum("same input"), checksum("same input"));
        assert_ne!(checksum("same input"), checksum("other input"));
    }
}
