use memmap2::Mmap;
use std::fs::File;

/// Read a whole file into an owned buffer. The caller gets a fully
/// materialized copy, so the same path can be reopened for writing
/// afterwards.
pub fn read_file_bytes(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;

    // Zero-length mappings are rejected by the OS
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    Ok(unsafe { Mmap::map(&file)? }.to_vec())
}
