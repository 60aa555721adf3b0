//! Course record codec (fixed 76-byte layout, packed)
//!
//! Record (LE, 76 bytes):
//!   code[4]   = i32
//!   name[60]  = UTF-8, zero padded, never split inside a code point
//!   hours[4]  = i32
//!   cost[8]   = f64 (IEEE-754)
//!
//! No header, footer or version tag: a data file is just records back to back.

use crate::consts::{
    CODE_OFFSET, COST_OFFSET, HOURS_OFFSET, NAME_BYTES, NAME_OFFSET, RECORD_SIZE,
};
use crate::utils::truncate_utf8_into;
use byteorder::{ByteOrder, LittleEndian as LE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: i32,
    pub name: String,
    pub hours: i32,
    pub cost: f64,
}

impl Course {
    /// Build a record whose `name` is already cut to what the name field can hold.
    pub fn new(code: i32, name: &str, hours: i32, cost: f64) -> Self {
        Self {
            code,
            name: decode_name(&encode_name(name)),
            hours,
            cost,
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        LE::write_i32(&mut buf[CODE_OFFSET..NAME_OFFSET], self.code);
        buf[NAME_OFFSET..HOURS_OFFSET].copy_from_slice(&encode_name(&self.name));
        LE::write_i32(&mut buf[HOURS_OFFSET..COST_OFFSET], self.hours);
        LE::write_f64(&mut buf[COST_OFFSET..RECORD_SIZE], self.cost);
        buf
    }

    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        let mut name = [0u8; NAME_BYTES];
        name.copy_from_slice(&buf[NAME_OFFSET..HOURS_OFFSET]);
        Self {
            code: LE::read_i32(&buf[CODE_OFFSET..NAME_OFFSET]),
            name: decode_name(&name),
            hours: LE::read_i32(&buf[HOURS_OFFSET..COST_OFFSET]),
            cost: LE::read_f64(&buf[COST_OFFSET..RECORD_SIZE]),
        }
    }
}

pub fn encode_name(text: &str) -> [u8; NAME_BYTES] {
    encode_name_bytes(text.as_bytes())
}

/// Byte-level variant of [`encode_name`]; tolerates input that is not valid UTF-8.
pub fn encode_name_bytes(bytes: &[u8]) -> [u8; NAME_BYTES] {
    let mut out = [0u8; NAME_BYTES];
    truncate_utf8_into(bytes, &mut out);
    out
}

/// Text up to the first zero byte. Bytes that are not UTF-8 decode lossily.
pub fn decode_name(buf: &[u8; NAME_BYTES]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(NAME_BYTES);
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_offsets_are_stable() {
        let c = Course::new(0x0102_0304, "Rust", 40, 1.5);
        let b = c.to_bytes();
        assert_eq!(&b[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&b[4..8], b"Rust");
        assert!(b[8..64].iter().all(|&x| x == 0));
        assert_eq!(&b[64..68], &40i32.to_le_bytes());
        assert_eq!(&b[68..76], &1.5f64.to_le_bytes());
        assert_eq!(Course::from_bytes(&b), c);
    }

    #[test]
    fn long_multibyte_name_is_cut_on_code_point() {
        // 30 x "ñ" = 60 bytes fits exactly; one more "ñ" does not
        let exact = "ñ".repeat(30);
        assert_eq!(decode_name(&encode_name(&exact)), exact);

        // "a" + 30 x "ñ" = 61 bytes: the last "ñ" would straddle the boundary
        let over = format!("a{}", "ñ".repeat(30));
        let enc = encode_name(&over);
        assert_eq!(enc[59], 0);
        assert_eq!(decode_name(&enc), format!("a{}", "ñ".repeat(29)));
    }

    #[test]
    fn decoded_name_is_always_a_prefix() {
        for text in ["", "plain", "€€€€€€€€€€€€€€€€€€€€€€€€", "日本語のコース名はとても長いのでここで切れるかもしれない", "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀"] {
            let dec = decode_name(&encode_name(text));
            assert!(text.starts_with(&dec), "{dec:?} is not a prefix of {text:?}");
            assert!(dec.len() <= NAME_BYTES);
        }
    }

    #[test]
    fn name_without_terminator_uses_all_bytes() {
        let buf = [b'x'; NAME_BYTES];
        assert_eq!(decode_name(&buf).len(), NAME_BYTES);
    }

    #[test]
    fn embedded_zero_ends_the_name() {
        let enc = encode_name("ab\0cd");
        assert_eq!(decode_name(&enc), "ab");
    }

    #[test]
    fn new_normalizes_name_to_stored_form() {
        let c = Course::new(1, &"x".repeat(80), 1, 1.0);
        assert_eq!(c.name.len(), NAME_BYTES);
        assert_eq!(Course::from_bytes(&c.to_bytes()), c);
    }
}
