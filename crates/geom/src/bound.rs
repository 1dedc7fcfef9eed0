//! Candidate curve points used to decide whether a curve crosses a
//! horizontal stripe.
//!
//! An intersection test between a curve and a rectangle collects the points
//! of the curve that fall within the rectangle's x range: the roots at both
//! vertical edges, the extrema and the curve's endpoints. Each point is
//! tagged by where it comes from. If one of them is inside the stripe, or if
//! two consecutive points (in curve order) from different sources lie on
//! both sides of it, the curve crosses the rectangle.

use arrayvec::ArrayVec;

/// Bound table capacity for quadratic curves: two roots per vertical edge,
/// two extrema and both endpoints.
pub const QUADRATIC_BOUND_CAPACITY: usize = 8;

/// Bound table capacity for cubic curves: three roots per vertical edge,
/// two x and two y extrema and both endpoints.
pub const CUBIC_BOUND_CAPACITY: usize = 12;

/// A point of the curve, relative to the curve's start point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundEntry {
    /// Curve parameter.
    pub t: f64,
    pub x: f64,
    pub y: f64,
    /// Identifies where the point comes from (which root set, which extremum
    /// or endpoint).
    pub tag: u32,
}

/// The outcome of classifying a bound table against a horizontal stripe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum BoundClass {
    /// No point of the curve within the x range is below the stripe: the
    /// curve does not cross the stripe nor the ray below it.
    Clear,
    /// The curve provably crosses the stripe.
    Crossing,
    /// The table does not decide, the curve must be evaluated directly.
    Undetermined,
}

/// A fixed-capacity table of candidate curve points.
#[derive(Clone, Debug, Default)]
pub struct BoundTable<const N: usize> {
    entries: ArrayVec<BoundEntry, N>,
}

impl<const N: usize> BoundTable<N> {
    pub fn new() -> Self {
        BoundTable {
            entries: ArrayVec::new(),
        }
    }

    /// Appends an entry.
    ///
    /// Entries beyond the capacity of the table are dropped.
    pub fn push(&mut self, entry: BoundEntry) {
        if self.entries.try_push(entry).is_err() {
            log::warn!("bound table full, dropping {:?}", entry);
        }
    }

    pub fn entries(&self) -> &[BoundEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sorts the entries by curve parameter.
    ///
    /// The sort is stable: entries with the same parameter keep their
    /// insertion order.
    pub fn sort(&mut self) {
        let entries = &mut self.entries[..];
        for i in 1..entries.len() {
            let mut j = i;
            while j > 0 && entries[j - 1].t > entries[j].t {
                entries.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    /// Classifies the table against the stripe `py1 <= y <= py2`.
    ///
    /// May sort the table.
    pub fn classify(&mut self, py1: f64, py2: f64) -> BoundClass {
        if self.entries.is_empty() {
            return BoundClass::Clear;
        }

        let mut up = 0;
        let mut down = 0;
        for entry in &self.entries {
            if entry.y < py1 {
                up += 1;
                continue;
            }
            if entry.y > py2 {
                down += 1;
                continue;
            }
            return BoundClass::Crossing;
        }

        if down == 0 {
            return BoundClass::Clear;
        }

        if up != 0 {
            self.sort();
            let crossing = self.entries.windows(2).any(|pair| {
                (pair[0].y > py2) != (pair[1].y > py2) && pair[0].tag != pair[1].tag
            });
            if crossing {
                return BoundClass::Crossing;
            }
        }

        BoundClass::Undetermined
    }
}

#[cfg(test)]
fn entry(t: f64, y: f64, tag: u32) -> BoundEntry {
    BoundEntry { t, x: 0.0, y, tag }
}

#[test]
fn sort_is_stable() {
    let mut table: BoundTable<CUBIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.75, 0.0, 0));
    table.push(entry(0.25, 1.0, 1));
    table.push(entry(0.75, 2.0, 2));
    table.push(entry(0.0, 3.0, 3));
    table.sort();

    let tags: ArrayVec<u32, CUBIC_BOUND_CAPACITY> = table.entries().iter().map(|e| e.tag).collect();
    assert_eq!(&tags[..], &[3, 1, 0, 2]);
}

#[test]
fn classify_empty() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Clear);
}

#[test]
fn classify_point_inside_stripe() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.1, -5.0, 0));
    table.push(entry(0.5, 0.5, 1));
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Crossing);
}

#[test]
fn classify_above_stripe() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.1, -5.0, 0));
    table.push(entry(0.5, -2.0, 1));
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Clear);
}

#[test]
fn classify_straddling_stripe() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.9, 5.0, 1));
    table.push(entry(0.1, -5.0, 0));
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Crossing);

    // Points from the same source on both sides do not prove anything.
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.9, 5.0, 0));
    table.push(entry(0.1, -5.0, 0));
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Undetermined);
}

#[test]
fn classify_below_stripe() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.1, 3.0, 0));
    table.push(entry(0.5, 4.0, 1));
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Undetermined);
}

#[test]
fn push_beyond_capacity() {
    let mut table: BoundTable<2> = BoundTable::new();
    table.push(entry(0.1, 3.0, 0));
    table.push(entry(0.2, 3.0, 0));
    table.push(entry(0.3, 3.0, 0));
    assert_eq!(table.len(), 2);
}

#[test]
fn clear_table() {
    let mut table: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    table.push(entry(0.1, 3.0, 0));
    table.push(entry(0.5, -3.0, 1));
    assert_eq!(table.len(), 2);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.classify(0.0, 1.0), BoundClass::Clear);
}
