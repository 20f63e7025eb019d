use core::cmp::Ordering;

/// Paint-order key for scene items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `seq`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DrawOrder {
    /// Layer. Higher values paint on top.
    pub z: i32,
    /// Insertion index, stable within a layer.
    pub seq: u32,
}

impl DrawOrder {
    #[inline]
    pub const fn new(z: i32, seq: u32) -> Self {
        Self { z, seq }
    }
}

impl Ord for DrawOrder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for DrawOrder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
