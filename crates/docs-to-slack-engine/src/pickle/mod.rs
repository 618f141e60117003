//! Pickle-style binary container: the framing Chromium uses for its
//! web-custom-data clipboard flavor. Fixed-width little-endian integers and
//! length-prefixed UTF-16 strings, every string field padded to a 4-byte
//! boundary.

pub mod payload;

/// Append-only byte buffer with the pickle primitive writes.
#[derive(Debug, Default)]
pub struct PickleWriter {
    buf: Vec<u8>,
}

impl PickleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 4 bytes, little-endian.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// UTF-16 code-unit count as u32, then the units (2 bytes each, LE,
    /// surrogate pairs for astral codepoints), then zero padding so the unit
    /// data ends on a 4-byte boundary.
    pub fn write_string16(&mut self, s: &str) {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.write_u32(units.len() as u32);
        for unit in &units {
            self.buf.extend_from_slice(&unit.to_le_bytes());
        }
        let padding = (4 - (units.len() * 2) % 4) % 4;
        self.buf.resize(self.buf.len() + padding, 0);
    }

    /// Keyed container body: entry count, then each key/value pair as
    /// string16 fields.
    pub fn write_entries(&mut self, pairs: &[(&str, &str)]) {
        self.write_u32(pairs.len() as u32);
        for (key, value) in pairs {
            self.write_string16(key);
            self.write_string16(value);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and hand back the accumulated bytes.
    pub fn into_payload(self) -> Vec<u8> {
        self.buf
    }
}

/// Prefix `inner` with its own byte length as a u32 LE, the outer framing the
/// clipboard sink consumes.
pub fn frame(inner: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(4 + inner.len());
    framed.extend_from_slice(&(inner.len() as u32).to_le_bytes());
    framed.extend_from_slice(inner);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn u32_is_four_bytes_little_endian() {
        let mut w = PickleWriter::new();
        w.write_u32(42);
        assert_eq!(w.into_payload(), vec![42, 0, 0, 0]);
    }

    #[rstest]
    #[case::empty("", 4, 0)]
    #[case::even_ascii("test", 4 + 8, 4)]
    #[case::odd_ascii("abc", 4 + 6 + 2, 3)]
    #[case::japanese("あいう", 4 + 6 + 2, 3)]
    #[case::astral_pair("a😀", 4 + 6 + 2, 3)]
    fn string16_length_and_alignment(
        #[case] input: &str,
        #[case] want_len: usize,
        #[case] want_units: u32,
    ) {
        let mut w = PickleWriter::new();
        w.write_string16(input);
        let bytes = w.into_payload();

        assert_eq!(bytes.len(), want_len);
        assert_eq!(bytes.len() % 4, 0);
        assert_eq!(read_u32(&bytes, 0), want_units);
    }

    #[test]
    fn string16_round_trips() {
        for input in ["", "plain", "あいうえお", "mixed 😀 text", "abc"] {
            let mut w = PickleWriter::new();
            w.write_string16(input);
            let bytes = w.into_payload();
            assert_eq!(read_string16(&bytes, 0).0, input);
        }
    }

    #[test]
    fn keyed_entries_pack_back_to_back() {
        let mut w = PickleWriter::new();
        w.write_entries(&[("key", "val")]);
        // count 4 + ("key": 4 + 6 + 2) + ("val": 4 + 6 + 2)
        assert_eq!(w.len(), 28);
        assert_eq!(read_u32(&w.into_payload(), 0), 1);
    }

    #[test]
    fn frame_prepends_inner_length() {
        let framed = frame(&[9, 9, 9, 9, 9, 9, 9, 9]);
        assert_eq!(framed.len(), 12);
        assert_eq!(read_u32(&framed, 0), 8);
        assert_eq!(frame(&[]), vec![0, 0, 0, 0]);
    }

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    /// Decode one string16 field, returning the string and the offset just
    /// past its padding.
    fn read_string16(bytes: &[u8], at: usize) -> (String, usize) {
        let units = read_u32(bytes, at) as usize;
        let data = &bytes[at + 4..at + 4 + units * 2];
        let decoded: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let padding = (4 - (units * 2) % 4) % 4;
        (String::from_utf16(&decoded).unwrap(), at + 4 + units * 2 + padding)
    }
}
