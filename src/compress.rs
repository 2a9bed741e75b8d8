use flate2::read::ZlibEncoder;
use flate2::write::ZlibDecoder;
use flate2::Compression;
use std::io::{copy, Write};

pub fn compress(src: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut compressed = Vec::new();

    // 6 = compression level
    let mut encoder = ZlibEncoder::new(src, Compression::new(6));
    copy(&mut encoder, &mut compressed)?;

    Ok(compressed)
}

pub fn decompress(src: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut decoder = ZlibDecoder::new(Vec::new());
    decoder.write_all(src)?;

    Ok(decoder.finish()?)
}
