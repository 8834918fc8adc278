/// Closed-form description of an integer or character range.
///
/// A range emits `count + 1` values: `start`, `start + step`, ... Character
/// ranges store Unicode code points and never carry a `width`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RangeData {
    pub start: i64,
    /// Number of values after `start`. Always below `i64::MAX`.
    pub count: u64,
    /// Signed distance between consecutive values; zero when `count == 0`.
    pub step: i64,
    /// Zero-pad width, `0` for no padding.
    pub width: usize,
}

impl RangeData {
    /// Encodes `start..end..step`.
    ///
    /// The sign of `step` is ignored: the direction always goes from `start`
    /// towards `end`, and a zero step counts as one. Returns `None` when the
    /// step magnitude or the element count does not fit in an `i64`.
    pub fn new(start: i64, end: i64, step: i64, width: usize) -> Option<Self> {
        if start == end {
            return Some(Self { start, count: 0, step: 0, width });
        }

        let magnitude = i64::try_from(step.unsigned_abs()).ok()?.max(1);
        let count = start.abs_diff(end) / magnitude.unsigned_abs();
        if count >= i64::MAX.unsigned_abs() {
            return None;
        }

        let step = match count {
            0 => 0,
            _ if start < end => magnitude,
            _ => -magnitude,
        };

        Some(Self { start, count, step, width })
    }

    /// Last value emitted by the range.
    pub fn end(&self) -> i64 {
        // `count * step` never leaves the interval the range was built from.
        self.start.wrapping_add((self.count as i64).wrapping_mul(self.step))
    }

    pub fn values(self) -> impl Iterator<Item = i64> {
        let Self { start, count, step, .. } = self;
        (0..=count).scan(start, move |value, i| {
            if i > 0 {
                *value += step;
            }
            Some(*value)
        })
    }
}
