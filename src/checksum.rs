//! Checksum engine for the payload trailer.
//!
//! PromptPay payloads end with tag 63 whose value is a CRC-16 over the
//! preceding text. The scheme uses a specific non-reflected variant of
//! CRC-16/CCITT, not the common bit-reversal table algorithm; scanning
//! terminals validate against this exact sequence of register operations,
//! so it must be reproduced bit for bit.

/// Computes the scheme's CRC-16 over `data` and formats it as 4 uppercase
/// hex digits, left-zero-padded.
///
/// # Examples
///
/// ```
/// use promptpay_qr::checksum::crc16;
///
/// let crc = crc16(b"00020101021158027 example");
/// assert_eq!(crc.len(), 4);
/// assert!(crc.bytes().all(|b| b.is_ascii_hexdigit()));
/// ```
pub fn crc16(data: &[u8]) -> String {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc = crc.rotate_left(8);
        crc ^= u16::from(byte);
        crc ^= (crc & 0xFF) >> 4;
        crc ^= crc << 12;
        crc ^= (crc & 0xFF) << 5;
    }
    format!("{crc:04X}")
}
