//! Fixed-width binary text tokens.
//!
//! Each sample component is written as 16 ASCII digits holding the two's
//! complement bit pattern of an `i16`, most significant bit first. The
//! writer and the reader are deliberately separate routines so that the
//! round trip between them is a real check on the format.
use crate::{Error, Result};

/// Characters per token.
pub const TOKEN_LEN: usize = 16;

/// Truncates toward zero into the 16-bit range, saturating at the limits.
#[inline]
pub fn quantize(value: f64) -> i16 {
    value as i16
}

/// Writes the bit pattern of `value`, scanning from `0x8000` downward.
pub fn int_to_bin(value: i16) -> String {
    let pattern = value as u16;
    let mut token = String::with_capacity(TOKEN_LEN);
    let mut mask: u16 = 0x8000;
    for _ in 0..TOKEN_LEN {
        token.push(if pattern & mask != 0 { '1' } else { '0' });
        mask >>= 1;
    }
    token
}

/// Whether `token` is exactly 16 characters of `'0'` / `'1'`.
#[inline]
pub fn is_token(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| b == b'0' || b == b'1')
}

/// Reads a token back into its signed value.
///
/// Position 0 selects the sign and is never summed: a `'0'` there adds up
/// the weights of the `'1'` digits in positions 1..16, a `'1'` there adds up
/// the weights of the `'0'` digits, adds one and negates.
pub fn bin_to_int(token: &str) -> Result<i16> {
    if !is_token(token) {
        return Err(Error::malformed(format!(
            "{token:?} is not {TOKEN_LEN} binary digits"
        )));
    }
    let digits = token.as_bytes();
    let weight = |digit: u8| -> i32 {
        (1..TOKEN_LEN)
            .filter(|&i| digits[i] == digit)
            .map(|i| 1i32 << (TOKEN_LEN - 1 - i))
            .sum()
    };

    let value = if digits[0] == b'0' {
        weight(b'1')
    } else {
        -(weight(b'0') + 1)
    };
    // Both branches land in [-0x8000, 0x7FFF].
    Ok(value as i16)
}
