use std::io::prelude::*;

use crate::codec::{Alphabet, Packer, Unpacker};
use crate::cover::{Cover, Uncover, MARKER};

/// A plain-text cover. Covering writes one marker byte followed by the
/// packed secret, so appending to an existing file and writing after a
/// copy of the carrier produce the same payload region.
pub struct TextCover<T: Write> {
    inner: T,
    packer: Packer,
}

impl<T: Write> TextCover<T> {
    pub fn new(inner: T, alphabet: Alphabet) -> TextCover<T> {
        TextCover {
            inner,
            packer: Packer::new(alphabet),
        }
    }
}

impl<T: Write> Cover for TextCover<T> {
    fn cover(&mut self, secret: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.write_all(&[MARKER])?;
        self.inner.write_all(&self.packer.pack(secret))?;
        self.inner.flush()?;

        Ok(())
    }
}

pub struct TextUncover<T: Read> {
    inner: T,
    unpacker: Unpacker,
}

impl<T: Read> TextUncover<T> {
    pub fn new(inner: T, alphabet: Alphabet) -> TextUncover<T> {
        TextUncover {
            inner,
            unpacker: Unpacker::new(alphabet),
        }
    }
}

impl<T: Read> Uncover for TextUncover<T> {
    /// The payload carries no length header, so the whole carrier is
    /// scanned; everything outside the alphabet is carrier text
    fn uncover<W: Write>(&mut self, dest: &mut W) -> Result<(), Box<dyn std::error::Error>> {
        let mut carrier = Vec::new();
        self.inner.read_to_end(&mut carrier)?;

        dest.write_all(&self.unpacker.unpack(carrier))?;

        Ok(())
    }
}

/// Remove every alphabet byte from the carrier, then at most one trailing
/// marker. Removing all trailing markers would eat whitespace the carrier
/// legitimately ends with, so only the single byte written by an
/// append-mode hide is undone.
pub fn strip(alphabet: &Alphabet, carrier: &[u8]) -> Vec<u8> {
    let mut clean: Vec<u8> = carrier
        .iter()
        .copied()
        .filter(|&byte| !alphabet.contains(byte))
        .collect();

    if clean.last() == Some(&MARKER) {
        clean.pop();
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Width;

    #[test]
    fn hides_and_recovers_through_a_carrier() -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = Alphabet::new(Width::One);

        let mut package = b"Hello world".to_vec();
        TextCover::new(&mut package, alphabet).cover(&[0x41])?;

        let mut expected = b"Hello world".to_vec();
        expected.push(MARKER);
        expected.extend([0x1c, 0x1d, 0x1c, 0x1c, 0x1c, 0x1c, 0x1c, 0x1d]);
        assert_eq!(expected, package);

        let mut recovered = Vec::new();
        TextUncover::new(&package[..], alphabet).uncover(&mut recovered)?;
        assert_eq!(vec![0x41], recovered);

        assert_eq!(b"Hello world".to_vec(), strip(&alphabet, &package));

        Ok(())
    }

    #[test]
    fn recovers_two_bit_payload_amid_unrelated_text() -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = Alphabet::new(Width::Two);

        // 0x41 = 01 00 00 01
        let package = b"some \x1dunrelated\x1c text\x1c here\x1d".to_vec();

        let mut recovered = Vec::new();
        TextUncover::new(&package[..], alphabet).uncover(&mut recovered)?;

        assert_eq!(vec![0x41], recovered);

        Ok(())
    }

    #[test]
    fn empty_secret_appends_only_the_marker() -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = Alphabet::new(Width::One);

        let mut package = b"carrier".to_vec();
        TextCover::new(&mut package, alphabet).cover(b"")?;

        assert_eq!(b"carrier ".to_vec(), package);

        let mut recovered = Vec::new();
        TextUncover::new(&package[..], alphabet).uncover(&mut recovered)?;
        assert!(recovered.is_empty());

        assert_eq!(b"carrier".to_vec(), strip(&alphabet, &package));

        Ok(())
    }

    #[test]
    fn strip_removes_payload_and_marker_once() -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = Alphabet::new(Width::One);

        let mut package = b"line one\nline two".to_vec();
        TextCover::new(&mut package, alphabet).cover(b"hidden")?;

        let once = strip(&alphabet, &package);
        assert_eq!(b"line one\nline two".to_vec(), once);

        // idempotent on the cleaned carrier
        assert_eq!(once, strip(&alphabet, &once));

        Ok(())
    }

    #[test]
    fn strip_leaves_plain_carriers_unchanged() {
        let alphabet = Alphabet::new(Width::One);
        let carrier = b"no payload here.";

        assert_eq!(carrier.to_vec(), strip(&alphabet, carrier));
    }

    #[test]
    fn strip_of_empty_carrier_is_a_no_op() {
        let alphabet = Alphabet::new(Width::Two);

        assert!(strip(&alphabet, b"").is_empty());
    }

    #[test]
    fn strip_with_narrow_alphabet_keeps_wide_symbols() {
        let alphabet = Alphabet::new(Width::One);
        let carrier = b"text\x1c\x1d\x1e\x1f ";

        // 0x1e and 0x1f are outside the one-bit codomain
        assert_eq!(b"text\x1e\x1f".to_vec(), strip(&alphabet, carrier));
    }
}
