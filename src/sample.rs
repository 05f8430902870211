
/// Kernel half-width. The neighborhood spans `-RADIUS ..= RADIUS` on each axis.
pub const RADIUS: i32 = 2;

/// Position relative to the kernel center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Offset {
        Offset { dx, dy }
    }

    #[inline]
    pub fn squared_distance(&self) -> u64 {
        (self.dx.unsigned_abs() as u64).pow(2) + (self.dy.unsigned_abs() as u64).pow(2)
    }

    // Folds the 8 rotations/reflections of an offset onto one representative.
    fn canonical(&self) -> (u32, u32) {
        let (a, b) = (self.dx.unsigned_abs(), self.dy.unsigned_abs());
        if a >= b { (a, b) } else { (b, a) }
    }
}

/// One symmetry class of the neighborhood: a label, the representative offset
/// the density is evaluated at, and how many neighborhood cells share it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    pub offset: Offset,
    pub multiplicity: u32,
}

/// The six symmetry classes, outermost first. `self` is always last.
pub const SAMPLES: [Sample; 6] = [
    Sample { label: "corner", offset: Offset::new(-2, -2), multiplicity: 4 },
    Sample { label: "outer_edge", offset: Offset::new(-2, -1), multiplicity: 8 },
    Sample { label: "outer_mid_edge", offset: Offset::new(-2, 0), multiplicity: 4 },
    Sample { label: "inner_corner", offset: Offset::new(-1, -1), multiplicity: 4 },
    Sample { label: "inner_edge", offset: Offset::new(-1, 0), multiplicity: 4 },
    Sample { label: "self", offset: Offset::new(0, 0), multiplicity: 1 },
];

/// Multiplicities of `SAMPLES`, in the same order.
pub fn multiplicities() -> Vec<u32> {
    SAMPLES.iter().map(|s| s.multiplicity).collect()
}

/// Index into `SAMPLES` of the class covering `(dx, dy)`, or None when the
/// offset lies outside the neighborhood.
pub fn classify(dx: i32, dy: i32) -> Option<usize> {
    let window = -RADIUS..=RADIUS;
    if !window.contains(&dx) || !window.contains(&dy) {
        return None;
    }
    let key = Offset::new(dx, dy).canonical();
    SAMPLES.iter().position(|s| s.offset.canonical() == key)
}
