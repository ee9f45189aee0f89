//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of
//! a pixel's quantization error. Weights are stored as integer numerators
//! over a per-kernel divisor so the published tables can be compared
//! literally.

/// One entry of a diffusion kernel.
///
/// Offsets are relative to the pixel being quantized. Pixels are visited in
/// raster order, so a tap either points at a later row (`dy > 0`) or to the
/// right on the current row (`dy == 0 && dx > 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    /// Row offset (0 = current row, 1 = next row, ...)
    pub dy: usize,
    /// Column offset (negative = left)
    pub dx: isize,
    /// Numerator of the weight; the kernel's divisor is the denominator
    pub weight: u8,
}

impl Tap {
    pub const fn new(dy: usize, dx: isize, weight: u8) -> Self {
        Self { dy, dx, weight }
    }

    /// Whether this tap only reaches pixels later in raster order.
    #[inline]
    pub const fn is_forward(&self) -> bool {
        self.dy > 0 || self.dx > 0
    }
}

/// An error diffusion kernel.
///
/// # Error Propagation
///
/// The fraction of error propagated is `sum(weights) / divisor`. The
/// classic kernels propagate 100%. Atkinson propagates 75% and Aman 87.5%;
/// the lost error gives both their higher-contrast look.
///
/// # Buffer Reach
///
/// `max_dy` is how many rows ahead the kernel writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Human-readable kernel name
    pub name: &'static str,

    /// Diffusion taps in the order they are applied.
    pub taps: &'static [Tap],

    /// Denominator for every tap weight.
    ///
    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,

    /// Maximum `dy` over all taps.
    pub max_dy: usize,
}

impl Kernel {
    /// Weight of `tap` as a fraction of the quantization error.
    #[inline]
    pub fn weight(&self, tap: &Tap) -> f64 {
        tap.weight as f64 / self.divisor as f64
    }

    /// Sum of all tap numerators.
    pub fn weight_sum(&self) -> u32 {
        self.taps.iter().map(|t| t.weight as u32).sum()
    }

    /// Total fraction of the quantization error this kernel propagates.
    pub fn propagation(&self) -> f64 {
        self.weight_sum() as f64 / self.divisor as f64
    }
}

/// Atkinson dithering kernel.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
///
///      (1/8)
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh. Only 6/8
/// of the error is propagated.
pub const ATKINSON: Kernel = Kernel {
    name: "Atkinson",
    taps: &[
        Tap::new(0, 1, 1),
        Tap::new(0, 2, 1),
        Tap::new(1, -1, 1),
        Tap::new(1, 0, 1),
        Tap::new(1, 1, 1),
        Tap::new(2, 0, 1),
    ],
    divisor: 8,
    max_dy: 2,
};

/// Aman dithering kernel.
///
/// Atkinson's footprint with the immediate neighbors weighted heavier.
///
/// ```text
///        X   4   1
///    2   4   2
///        1
///
///      (1/16)
/// ```
pub const AMAN: Kernel = Kernel {
    name: "Aman",
    taps: &[
        Tap::new(0, 1, 4),
        Tap::new(0, 2, 1),
        Tap::new(1, -1, 2),
        Tap::new(1, 0, 4),
        Tap::new(1, 1, 2),
        Tap::new(2, 0, 1),
    ],
    divisor: 16,
    max_dy: 2,
};

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
///
///      (1/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "Floyd-Steinberg",
    taps: &[
        Tap::new(0, 1, 7),
        Tap::new(1, -1, 3),
        Tap::new(1, 0, 5),
        Tap::new(1, 1, 1),
    ],
    divisor: 16,
    max_dy: 1,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
///
///          (1/48)
/// ```
///
/// Uses the published weight of 5 two rows straight down, which makes the
/// table sum to 48.
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    name: "Jarvis-Judice-Ninke",
    taps: &[
        Tap::new(0, 1, 7),
        Tap::new(0, 2, 5),
        Tap::new(1, -2, 3),
        Tap::new(1, -1, 5),
        Tap::new(1, 0, 7),
        Tap::new(1, 1, 5),
        Tap::new(1, 2, 3),
        Tap::new(2, -2, 1),
        Tap::new(2, -1, 3),
        Tap::new(2, 0, 5),
        Tap::new(2, 1, 3),
        Tap::new(2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// Stucki dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
///
///          (1/42)
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "Stucki",
    taps: &[
        Tap::new(0, 1, 8),
        Tap::new(0, 2, 4),
        Tap::new(1, -2, 2),
        Tap::new(1, -1, 4),
        Tap::new(1, 0, 8),
        Tap::new(1, 1, 4),
        Tap::new(1, 2, 2),
        Tap::new(2, -2, 1),
        Tap::new(2, -1, 2),
        Tap::new(2, 0, 4),
        Tap::new(2, 1, 2),
        Tap::new(2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Burkes dithering kernel.
///
/// Stucki's first two rows, renormalized.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///
///          (1/32)
/// ```
pub const BURKES: Kernel = Kernel {
    name: "Burkes",
    taps: &[
        Tap::new(0, 1, 8),
        Tap::new(0, 2, 4),
        Tap::new(1, -2, 2),
        Tap::new(1, -1, 4),
        Tap::new(1, 0, 8),
        Tap::new(1, 1, 4),
        Tap::new(1, 2, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// Every diffusion kernel in the catalog.
pub const KERNELS: [&Kernel; 6] = [
    &ATKINSON,
    &AMAN,
    &FLOYD_STEINBERG,
    &JARVIS_JUDICE_NINKE,
    &STUCKI,
    &BURKES,
];
