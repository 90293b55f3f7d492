// WRT - wrt-format
// Module: LEB128 codec
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Little-endian base-128 variable-width integers.
//!
//! Decoding accumulates into a 64-bit register regardless of the
//! target width; the target width only bounds how many continuation
//! bytes are legal and what the final byte's unused high bits must
//! look like. A byte stream that uses more bytes than its target
//! width requires, or whose final byte's unused bits are not a
//! faithful sign extension, is rejected as overlong: each value has
//! exactly one valid encoding.
//!
//! Sign-extension of the decoded value, once a terminating byte is
//! found, is computed from the number of bits actually consumed
//! (`shift`): a mask of all-ones left-shifted by the full accumulated
//! shift count.

#[cfg(feature = "alloc")]
extern crate alloc;

use wrt_error::{kinds, Result};

fn max_bytes_for_width(width: u32) -> usize {
    ((width + 6) / 7) as usize
}

fn decode_unsigned_raw(buf: &[u8], width: u32) -> Result<(u64, usize)> {
    let max_bytes = max_bytes_for_width(width);
    let mut result: u64 = 0;
    for (i, slot) in (0..max_bytes).enumerate() {
        let byte = *buf.get(slot).ok_or_else(kinds::leb128_truncated)?;
        let low = u64::from(byte & 0x7F);
        let shift = (i as u32) * 7;
        if slot == max_bytes - 1 {
            let remaining_bits = width - shift;
            let max_low = if remaining_bits >= 7 { 0x7F } else { (1u64 << remaining_bits) - 1 };
            if low > max_low {
                return Err(kinds::leb128_overlong());
            }
        }
        result |= low << shift;
        if byte & 0x80 == 0 {
            return Ok((result, slot + 1));
        }
    }
    Err(kinds::leb128_overlong())
}

fn decode_signed_raw(buf: &[u8], width: u32) -> Result<(i64, usize)> {
    let max_bytes = max_bytes_for_width(width);
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    for (i, slot) in (0..max_bytes).enumerate() {
        let byte = *buf.get(slot).ok_or_else(kinds::leb128_truncated)?;
        let low = i64::from(byte & 0x7F);
        if slot == max_bytes - 1 {
            let remaining_bits = width - (i as u32) * 7;
            let keep_mask = if remaining_bits >= 7 { 0x7F } else { (1i64 << remaining_bits) - 1 };
            let sign_bit_pos = remaining_bits.saturating_sub(1);
            let sign_bit = (low >> sign_bit_pos) & 1;
            let expected_high = if sign_bit == 1 { 0x7F & !keep_mask } else { 0 };
            if (low & !keep_mask) != expected_high {
                return Err(kinds::leb128_overlong());
            }
        }
        result |= low << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if shift < 64 && (byte & 0x40) != 0 {
                result |= -1i64 << shift;
            }
            return Ok((result, slot + 1));
        }
    }
    Err(kinds::leb128_overlong())
}

/// Decodes an unsigned 32-bit LEB128 integer.
///
/// # Errors
///
/// `leb128_truncated` if `buf` runs out before a terminating byte;
/// `leb128_overlong` if more bytes are used than 32 bits require.
pub fn decode_u32(buf: &[u8]) -> Result<(u32, usize)> {
    let (value, len) = decode_unsigned_raw(buf, 32)?;
    Ok((value as u32, len))
}

/// Decodes an unsigned 64-bit LEB128 integer.
///
/// # Errors
///
/// See [`decode_u32`].
pub fn decode_u64(buf: &[u8]) -> Result<(u64, usize)> {
    decode_unsigned_raw(buf, 64)
}

/// Decodes a signed 32-bit LEB128 integer.
///
/// # Errors
///
/// See [`decode_u32`].
pub fn decode_i32(buf: &[u8]) -> Result<(i32, usize)> {
    let (value, len) = decode_signed_raw(buf, 32)?;
    Ok((value as i32, len))
}

/// Decodes a signed 64-bit LEB128 integer.
///
/// # Errors
///
/// See [`decode_u32`].
pub fn decode_i64(buf: &[u8]) -> Result<(i64, usize)> {
    decode_signed_raw(buf, 64)
}

/// Decodes a signed 33-bit LEB128 integer, the width `blocktype`
/// type-index immediates use.
///
/// # Errors
///
/// See [`decode_u32`].
pub fn decode_i33(buf: &[u8]) -> Result<(i64, usize)> {
    decode_signed_raw(buf, 33)
}

fn encode_unsigned(mut value: u64, out: &mut dyn FnMut(u8)) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out(byte);
            break;
        }
        out(byte | 0x80);
    }
}

fn encode_signed(value: i64, out: &mut dyn FnMut(u8)) {
    let mut value = value;
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        let done = (value == 0 && byte & 0x40 == 0) || (value == -1 && byte & 0x40 != 0);
        if done {
            out(byte);
            break;
        }
        out(byte | 0x80);
    }
}

/// Encodes `value` as unsigned LEB128, pushing each byte via `push`.
pub fn encode_u64(value: u64, push: &mut impl FnMut(u8)) {
    encode_unsigned(value, push);
}

/// Encodes `value` as unsigned LEB128, pushing each byte via `push`.
pub fn encode_u32(value: u32, push: &mut impl FnMut(u8)) {
    encode_unsigned(u64::from(value), push);
}

/// Encodes `value` as signed LEB128, pushing each byte via `push`.
pub fn encode_i64(value: i64, push: &mut impl FnMut(u8)) {
    encode_signed(value, push);
}

/// Encodes `value` as signed LEB128, pushing each byte via `push`.
pub fn encode_i32(value: i32, push: &mut impl FnMut(u8)) {
    encode_signed(i64::from(value), push);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_single_byte_examples() {
        let (value, len) = decode_u32(&[0x45, 0x42, 0x30, 0x6C]).unwrap();
        assert_eq!(value, 69);
        assert_eq!(len, 1);
    }

    #[test]
    fn signed_single_byte_examples() {
        let (value, len) = decode_i32(&[0x45, 0x42, 0x30, 0x6C]).unwrap();
        assert_eq!(value, -59);
        assert_eq!(len, 1);
    }

    #[test]
    fn unsigned_multi_byte() {
        // 624485 = 0xE5 0x8E 0x26 in the spec's canonical LEB128 example.
        let (value, len) = decode_u32(&[0xE5, 0x8E, 0x26]).unwrap();
        assert_eq!(value, 624_485);
        assert_eq!(len, 3);
    }

    #[test]
    fn signed_multi_byte_negative() {
        let (value, len) = decode_i32(&[0x9B, 0xF1, 0x59]).unwrap();
        assert_eq!(value, -624_485);
        assert_eq!(len, 3);
    }

    #[test]
    fn truncated_input_is_rejected() {
        assert!(decode_u32(&[0x80]).is_err());
        assert!(decode_u32(&[]).is_err());
    }

    #[test]
    fn overlong_u32_is_rejected() {
        // Five continuation bytes whose last byte sets bits above bit 31.
        assert!(decode_u32(&[0x80, 0x80, 0x80, 0x80, 0x70]).is_err());
    }

    #[test]
    fn round_trip_u32() {
        for value in [0u32, 1, 127, 128, 300, u32::MAX, 1 << 31] {
            let mut bytes = alloc::vec::Vec::new();
            encode_u32(value, &mut |b| bytes.push(b));
            let (decoded, len) = decode_u32(&bytes).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(len, bytes.len());
        }
    }

    #[test]
    fn round_trip_i32() {
        for value in [0i32, 1, -1, 63, -64, 1000, -1000, i32::MIN, i32::MAX] {
            let mut bytes = alloc::vec::Vec::new();
            encode_i32(value, &mut |b| bytes.push(b));
            let (decoded, len) = decode_i32(&bytes).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(len, bytes.len());
        }
    }

    #[test]
    fn round_trip_u64_and_i64() {
        for value in [0u64, 1, u64::MAX, 1 << 63] {
            let mut bytes = alloc::vec::Vec::new();
            encode_u64(value, &mut |b| bytes.push(b));
            let (decoded, _) = decode_u64(&bytes).unwrap();
            assert_eq!(decoded, value);
        }
        for value in [0i64, -1, i64::MIN, i64::MAX] {
            let mut bytes = alloc::vec::Vec::new();
            encode_i64(value, &mut |b| bytes.push(b));
            let (decoded, _) = decode_i64(&bytes).unwrap();
            assert_eq!(decoded, value);
        }
    }
}
