use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

pub fn write_f64<W: Write>(w: &mut W, v: f64) -> io::Result<()> { w.write_f64::<LE>(v) }
pub fn read_i32<R: Read>(r: &mut R) -> io::Result<i32> { r.read_i32::<LE>() }

/// Byte length of a UTF-8 sequence given its leading byte. Bytes that cannot
/// start a sequence count as 1 so callers always make progress.
#[inline]
pub fn utf8_char_len(lead: u8) -> usize {
    if lead & 0x80 == 0x00 { return 1; }
    if lead & 0xE0 == 0xC0 { return 2; }
    if lead & 0xF0 == 0xE0 { return 3; }
    if lead & 0xF8 == 0xF0 { return 4; }
    1
}

/// Copy whole code points of `input` into `out`, zero-filling the remainder.
/// Stops at the first sequence that does not fit or is cut short by the end
/// of `input`. Returns the number of bytes copied.
pub fn truncate_utf8_into(input: &[u8], out: &mut [u8]) -> usize {
    out.fill(0);
    let (mut i, mut written) = (0usize, 0usize);
    while i < input.len() && written < out.len() {
        let clen = utf8_char_len(input[i]);
        if i + clen > input.len() || written + clen > out.len() { break; }
        out[written..written + clen].copy_from_slice(&input[i..i + clen]);
        written += clen;
        i += clen;
    }
    written
}

/// Read until `buf` is full or the reader is exhausted.
pub fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_len_follows_leading_byte() {
        assert_eq!(utf8_char_len(b'a'), 1);
        assert_eq!(utf8_char_len(0xC3), 2);
        assert_eq!(utf8_char_len(0xE2), 3);
        assert_eq!(utf8_char_len(0xF0), 4);
        // continuation and 0xF8.. bytes are not leaders
        assert_eq!(utf8_char_len(0x80), 1);
        assert_eq!(utf8_char_len(0xFF), 1);
    }

    #[test]
    fn truncation_keeps_whole_code_points() {
        let mut out = [0xAAu8; 4];
        // "aé€": 1 + 2 + 3 bytes, only "aé" fits in 4
        let n = truncate_utf8_into("aé€".as_bytes(), &mut out);
        assert_eq!(n, 3);
        assert_eq!(&out, &[b'a', 0xC3, 0xA9, 0]);
    }

    #[test]
    fn truncation_stops_at_cut_sequence() {
        let mut out = [0u8; 8];
        // 0xE2 announces 3 bytes but input ends after 2
        let n = truncate_utf8_into(&[b'x', 0xE2, 0x82], &mut out);
        assert_eq!(n, 1);
        assert_eq!(out[..2], [b'x', 0]);
    }

    #[test]
    fn invalid_leading_byte_is_copied_alone() {
        let mut out = [0u8; 4];
        let n = truncate_utf8_into(&[0x80, b'z'], &mut out);
        assert_eq!(n, 2);
        assert_eq!(out[..2], [0x80, b'z']);
    }

    #[test]
    fn read_full_reports_short_input() {
        let data = [1u8, 2, 3];
        let mut buf = [0u8; 5];
        assert_eq!(read_full(&mut &data[..], &mut buf).unwrap(), 3);
    }
}
