/// Reserved symbol table: the ASCII separator bytes FS, GS, RS and US.
/// None of them occupy character space when a text file is displayed.
const SYMBOLS: [u8; 4] = [0x1c, 0x1d, 0x1e, 0x1f];

/// How many bits of the secret one symbol carries.
///
/// The two widths are distinct wire formats: a stream packed with one
/// width cannot be unpacked with the other, and the choice is not
/// recorded in the carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    One,
    Two,
}

impl Width {
    pub fn bits(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
        }
    }
}

/// Injective mapping between bit groups of a fixed width and a prefix of
/// the reserved symbol table. Immutable once constructed; both width
/// variants can coexist.
#[derive(Clone, Copy, Debug)]
pub struct Alphabet {
    width: Width,
}

impl Alphabet {
    pub fn new(width: Width) -> Alphabet {
        Alphabet { width }
    }

    /// Bits per symbol
    pub fn bits(&self) -> usize {
        self.width.bits()
    }

    /// Codomain size; the first `size()` entries of the symbol table are in use
    pub fn size(&self) -> usize {
        1 << self.bits()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.group(byte).is_some()
    }

    fn symbol(&self, group: u8) -> u8 {
        debug_assert!((group as usize) < self.size());

        SYMBOLS[group as usize]
    }

    // The symbol table is contiguous, so the reverse mapping is arithmetic
    fn group(&self, symbol: u8) -> Option<u8> {
        let group = symbol.wrapping_sub(SYMBOLS[0]);

        ((group as usize) < self.size()).then_some(group)
    }
}

/// Converts a secret into a sequence of alphabet symbols.
pub struct Packer {
    alphabet: Alphabet,
}

impl Packer {
    pub fn new(alphabet: Alphabet) -> Packer {
        Packer { alphabet }
    }

    /// Expand each secret byte MSB-first into groups of `width` bits and
    /// map every group to its symbol. Empty input packs to empty output.
    pub fn pack(&self, secret: &[u8]) -> Vec<u8> {
        let width = self.alphabet.bits();
        let mask = (1u8 << width) - 1;

        let mut packed = Vec::with_capacity(secret.len() * (8 / width));

        for &byte in secret {
            let mut shift = 8;

            while shift > 0 {
                shift -= width;
                packed.push(self.alphabet.symbol((byte >> shift) & mask));
            }
        }

        packed
    }
}

/// Reconstructs a secret from any byte stream that interleaves alphabet
/// symbols with ordinary carrier bytes.
pub struct Unpacker {
    alphabet: Alphabet,
}

impl Unpacker {
    pub fn new(alphabet: Alphabet) -> Unpacker {
        Unpacker { alphabet }
    }

    /// Single pass over the stream: bytes outside the alphabet's codomain
    /// are skipped, retained symbols are reverse-mapped and their bit
    /// groups accumulated into whole bytes. A trailing group of fewer than
    /// 8 bits cannot form a byte and is dropped.
    pub fn unpack(&self, stream: impl IntoIterator<Item = u8>) -> Vec<u8> {
        let width = self.alphabet.bits();

        let mut unpacked = Vec::new();
        let mut acc = 0u8;
        let mut bits = 0;

        for byte in stream {
            let Some(group) = self.alphabet.group(byte) else {
                continue;
            };

            acc = (acc << width) | group;
            bits += width;

            if bits == 8 {
                unpacked.push(acc);
                acc = 0;
                bits = 0;
            }
        }

        unpacked
    }
}
