/// Appends `value` in decimal, zero-padded to `width` columns.
///
/// The sign takes up one column of the width: `-1` at width 3 is `-01`.
pub fn push_integer(buffer: &mut Vec<u8>, value: i64, width: usize) {
    let mut digits = [0u8; 20];
    let mut start = digits.len();
    let mut magnitude = value.unsigned_abs();
    loop {
        start -= 1;
        digits[start] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    let digits = &digits[start..];

    let mut width = width;
    if value < 0 {
        buffer.push(b'-');
        width = width.saturating_sub(1);
    }
    buffer.resize(buffer.len() + width.saturating_sub(digits.len()), b'0');
    buffer.extend_from_slice(digits);
}
