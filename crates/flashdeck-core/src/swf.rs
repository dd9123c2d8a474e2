use std::fmt;

/// Shortest header a real SWF can have: 3 signature bytes, 1 version byte,
/// 4 length bytes.
pub const HEADER_LEN: usize = 8;

/// SWF container signature, from the first three bytes of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// `FWS` — uncompressed.
    Uncompressed,
    /// `CWS` — zlib-compressed body (SWF 6+).
    Zlib,
    /// `ZWS` — LZMA-compressed body (SWF 13+).
    Lzma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwfHeader {
    pub signature: Signature,
    pub version: u8,
    /// Uncompressed length of the whole file, as declared in the header.
    pub file_length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SniffError {
    TooShort(usize),
    BadMagic([u8; 3]),
}

impl fmt::Display for SniffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(f, "{len} bytes is too short for a SWF header"),
            Self::BadMagic(magic) => write!(
                f,
                "bad SWF signature {:?} (expected FWS, CWS, or ZWS)",
                magic.map(|b| b as char)
            ),
        }
    }
}

impl std::error::Error for SniffError {}

/// Inspect the leading bytes of a file and read the SWF header out of them.
/// Only the header is examined; the body is not decompressed or validated.
pub fn sniff(bytes: &[u8]) -> Result<SwfHeader, SniffError> {
    if bytes.len() < HEADER_LEN {
        return Err(SniffError::TooShort(bytes.len()));
    }
    let signature = match &bytes[..3] {
        b"FWS" => Signature::Uncompressed,
        b"CWS" => Signature::Zlib,
        b"ZWS" => Signature::Lzma,
        other => return Err(SniffError::BadMagic([other[0], other[1], other[2]])),
    };
    Ok(SwfHeader {
        signature,
        version: bytes[3],
        file_length: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    })
}

pub fn is_swf(bytes: &[u8]) -> bool {
    sniff(bytes).is_ok()
}
