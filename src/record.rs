use serde::{Deserialize, Serialize};

/// Width in bytes of the fixed product field.
pub const PRODUCT_LEN: usize = 10;

/// Width in bytes of the fixed province field.
pub const PROVINCE_LEN: usize = 19;

/// Size in bytes of one packed record on disk.
///
/// Fields are packed in file order with no padding:
/// dock (4) + product (10) + province (19) + quantity (4) = 37 bytes.
pub const RECORD_SIZE: usize = 4 + PRODUCT_LEN + PROVINCE_LEN + 4;

/// One dock dispatch event as stored in the binary file.
///
/// Text fields keep their raw fixed-width bytes exactly as read: they may
/// carry trailing NUL padding, or no terminator at all when the text fills
/// the buffer. Use [`DispatchRecord::product`] / [`DispatchRecord::province`]
/// (or [`clean_str`]) wherever the text is compared or printed.
///
/// # Examples
///
/// ```
/// use dispatch_report::record::DispatchRecord;
///
/// let rec = DispatchRecord::new(3, "Bolts", "Cordoba", 120);
/// assert_eq!(rec.dock, 3);
/// assert_eq!(rec.product(), "Bolts");
/// assert_eq!(rec.province(), "Cordoba");
/// assert_eq!(rec.quantity, 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Dock number (expected 0-7, not validated)
    pub dock: i32,
    /// Product name, raw fixed-width bytes
    pub product: [u8; PRODUCT_LEN],
    /// Province name, raw fixed-width bytes
    pub province: [u8; PROVINCE_LEN],
    /// Dispatched units
    pub quantity: i32,
}

impl DispatchRecord {
    /// Build a record from cleaned text, packing the fields to their fixed
    /// widths. Text longer than the field is truncated at the width.
    pub fn new(dock: i32, product: &str, province: &str, quantity: i32) -> Self {
        Self {
            dock,
            product: pack_str(product),
            province: pack_str(province),
            quantity,
        }
    }

    /// The cleaned product name.
    pub fn product(&self) -> String {
        clean_str(&self.product)
    }

    /// The cleaned province name.
    pub fn province(&self) -> String {
        clean_str(&self.province)
    }
}

/// Interpret a raw fixed-width field as text.
///
/// Reading stops at the first NUL byte or at the end of the buffer, whichever
/// comes first, so a field that fills its declared width exactly is returned
/// in full. Non-UTF-8 bytes are replaced lossily.
///
/// # Examples
///
/// ```
/// use dispatch_report::record::clean_str;
///
/// assert_eq!(clean_str(b"Nails\0\0\0\0\0"), "Nails");
/// assert_eq!(clean_str(b"ExactWidth"), "ExactWidth");
/// ```
pub fn clean_str(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

/// Pack text into a fixed-width field: truncated at `N` bytes, NUL-padded
/// below it. A string of exactly `N` bytes fills the buffer with no
/// terminator.
pub fn pack_str<const N: usize>(s: &str) -> [u8; N] {
    let mut buf = [0u8; N];
    let len = s.len().min(N);
    buf[..len].copy_from_slice(&s.as_bytes()[..len]);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_str_stops_at_nul() {
        let raw = *b"Ab\0cdefghi";
        assert_eq!(clean_str(&raw), "Ab");
    }

    #[test]
    fn test_clean_str_full_width() {
        // No terminator at all: the whole declared width is meaningful.
        let raw = *b"ABCDEFGHIJ";
        assert_eq!(clean_str(&raw), "ABCDEFGHIJ");
    }

    #[test]
    fn test_clean_str_empty() {
        assert_eq!(clean_str(&[0u8; PRODUCT_LEN]), "");
    }

    #[test]
    fn test_pack_str_pads_and_truncates() {
        let packed: [u8; 4] = pack_str("ab");
        assert_eq!(packed, *b"ab\0\0");

        let packed: [u8; 4] = pack_str("abcdef");
        assert_eq!(packed, *b"abcd");
    }

    #[test]
    fn test_pack_clean_inverse() {
        let rec = DispatchRecord::new(1, "Screws", "Buenos Aires", 42);
        assert_eq!(rec.product(), "Screws");
        assert_eq!(rec.province(), "Buenos Aires");
    }
}
