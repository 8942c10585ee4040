use crate::record::{DispatchRecord, RECORD_SIZE};
use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// All multi-byte integers on disk are little-endian.
struct BinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> BinaryReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    fn read_i32(&mut self) -> Result<i32, BinError> {
        Ok(self.cursor.read_i32::<LE>()?)
    }

    fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], BinError> {
        let mut buf = [0u8; N];
        self.cursor.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn read_record(&mut self) -> Result<DispatchRecord, BinError> {
        Ok(DispatchRecord {
            dock: self.read_i32()?,
            product: self.read_bytes()?,
            province: self.read_bytes()?,
            quantity: self.read_i32()?,
        })
    }
}

/// Decode consecutive packed records from `data`.
///
/// A trailing partial chunk (fewer than [`RECORD_SIZE`] bytes) is silently
/// discarded and decoding stops there. Empty input yields an empty vec.
pub fn read_records(data: &[u8]) -> Result<Vec<DispatchRecord>, BinError> {
    let mut reader = BinaryReader::new(data);
    let count = data.len() / RECORD_SIZE;
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(reader.read_record()?);
    }
    Ok(records)
}

/// Read a dispatch file, degrading to an empty sequence when the source
/// cannot be opened or read. The failure is reported on stderr; downstream
/// stages then produce their "no data" sections instead of the program
/// failing.
pub fn load_records(path: &Path) -> Vec<DispatchRecord> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error opening {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match read_records(&data) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

struct BinaryWriter {
    cursor: Cursor<Vec<u8>>,
}

impl BinaryWriter {
    fn new() -> Self {
        Self {
            cursor: Cursor::new(Vec::new()),
        }
    }

    fn into_inner(self) -> Vec<u8> {
        self.cursor.into_inner()
    }

    fn write_i32(&mut self, v: i32) -> Result<(), BinError> {
        self.cursor.write_i32::<LE>(v)?;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<(), BinError> {
        self.cursor.write_all(buf)?;
        Ok(())
    }

    fn write_record(&mut self, record: &DispatchRecord) -> Result<(), BinError> {
        self.write_i32(record.dock)?;
        self.write_bytes(&record.product)?;
        self.write_bytes(&record.province)?;
        self.write_i32(record.quantity)?;
        Ok(())
    }
}

/// Encode records in the packed on-disk layout. Text fields are written from
/// their raw fixed buffers verbatim.
pub fn write_records(records: &[DispatchRecord]) -> Result<Vec<u8>, BinError> {
    let mut writer = BinaryWriter::new();
    for record in records {
        writer.write_record(record)?;
    }
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_empty() {
        let records = read_records(&[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_single_record() {
        let mut data = Vec::new();
        data.extend_from_slice(&5i32.to_le_bytes());
        data.extend_from_slice(b"Nails\0\0\0\0\0");
        data.extend_from_slice(b"Santa Fe\0\0\0\0\0\0\0\0\0\0\0");
        data.extend_from_slice(&30i32.to_le_bytes());
        assert_eq!(data.len(), RECORD_SIZE);

        let records = read_records(&data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].dock, 5);
        assert_eq!(records[0].product(), "Nails");
        assert_eq!(records[0].province(), "Santa Fe");
        assert_eq!(records[0].quantity, 30);
    }

    #[test]
    fn test_partial_trailing_chunk_discarded() {
        let rec = DispatchRecord::new(2, "Rope", "Mendoza", 7);
        let mut data = write_records(&[rec]).unwrap();
        // Append a truncated second record
        data.extend_from_slice(&9i32.to_le_bytes());
        data.extend_from_slice(b"Glue");

        let records = read_records(&data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], rec);
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            DispatchRecord::new(1, "Screws", "Buenos Aires", 100),
            DispatchRecord::new(0, "ExactWidth", "Tierra del Fuego AI", -3),
            DispatchRecord::new(7, "", "", 0),
        ];

        let data = write_records(&records).unwrap();
        assert_eq!(data.len(), records.len() * RECORD_SIZE);

        let decoded = read_records(&data).unwrap();
        assert_eq!(decoded, records);
        // Full-width fields survive without a terminator
        assert_eq!(decoded[1].product(), "ExactWidth");
        assert_eq!(decoded[1].province(), "Tierra del Fuego AI");
    }

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let records = load_records(Path::new("definitely/not/here.bin"));
        assert!(records.is_empty());
    }
}
