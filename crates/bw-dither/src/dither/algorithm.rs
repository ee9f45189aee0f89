//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use super::kernel::{
    Kernel, Tap, AMAN, ATKINSON, BURKES, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, STUCKI,
};

/// Every transform the engine can apply to a pixel grid.
///
/// The first three are pass-through modes that never diffuse error; the
/// rest select a diffusion [`Kernel`].
///
/// # Example
///
/// ```
/// use bw_dither::Algorithm;
///
/// let algorithm: Algorithm = "floyd-steinberg".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::FloydSteinberg);
/// assert_eq!(algorithm.label(), "Floyd-Steinberg");
/// assert_eq!(algorithm.kernel().unwrap().divisor, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Output equals input.
    Copy,

    /// Rec. 709 luminance, no thresholding.
    Grayscale,

    /// Hard threshold at 127 with the error discarded.
    Thresholding,

    /// Atkinson error diffusion (75% propagation).
    ///
    /// Loses a quarter of the error, so highlights and shadows clip to
    /// solid white and black with high local contrast.
    #[default]
    Atkinson,

    /// Aman error diffusion (87.5% propagation).
    ///
    /// Atkinson's six-neighbor footprint with the adjacent pixels weighted
    /// heavier than the two-away ones.
    Aman,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    FloydSteinberg,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbors).
    JarvisJudiceNinke,

    /// Stucki error diffusion (100% propagation, 12 neighbors).
    Stucki,

    /// Burkes error diffusion (100% propagation, 7 neighbors).
    Burkes,
}

/// What the engine does for a given [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Return the input unchanged.
    Copy,
    /// Replace each pixel by its luminance.
    Grayscale,
    /// Replace each pixel by its thresholded luminance.
    Threshold,
    /// Threshold with error diffusion through the kernel.
    Diffuse(&'static Kernel),
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Copy,
        Algorithm::Grayscale,
        Algorithm::Thresholding,
        Algorithm::Atkinson,
        Algorithm::Aman,
        Algorithm::FloydSteinberg,
        Algorithm::JarvisJudiceNinke,
        Algorithm::Stucki,
        Algorithm::Burkes,
    ];

    /// Stable human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Copy => "Copy",
            Algorithm::Grayscale => "Grayscale",
            Algorithm::Thresholding => "Thresholding",
            Algorithm::Atkinson => "Atkinson",
            Algorithm::Aman => "Aman",
            Algorithm::FloydSteinberg => "Floyd-Steinberg",
            Algorithm::JarvisJudiceNinke => "Jarvis-Judice-Ninke",
            Algorithm::Stucki => "Stucki",
            Algorithm::Burkes => "Burkes",
        }
    }

    /// Lowercase kebab-case identifier, suitable for file names and CLI flags.
    pub const fn slug(self) -> &'static str {
        match self {
            Algorithm::Copy => "copy",
            Algorithm::Grayscale => "grayscale",
            Algorithm::Thresholding => "thresholding",
            Algorithm::Atkinson => "atkinson",
            Algorithm::Aman => "aman",
            Algorithm::FloydSteinberg => "floyd-steinberg",
            Algorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            Algorithm::Stucki => "stucki",
            Algorithm::Burkes => "burkes",
        }
    }

    /// Engine behavior for this algorithm.
    pub const fn mode(self) -> Mode {
        match self {
            Algorithm::Copy => Mode::Copy,
            Algorithm::Grayscale => Mode::Grayscale,
            Algorithm::Thresholding => Mode::Threshold,
            Algorithm::Atkinson => Mode::Diffuse(&ATKINSON),
            Algorithm::Aman => Mode::Diffuse(&AMAN),
            Algorithm::FloydSteinberg => Mode::Diffuse(&FLOYD_STEINBERG),
            Algorithm::JarvisJudiceNinke => Mode::Diffuse(&JARVIS_JUDICE_NINKE),
            Algorithm::Stucki => Mode::Diffuse(&STUCKI),
            Algorithm::Burkes => Mode::Diffuse(&BURKES),
        }
    }

    /// Diffusion kernel, or `None` for pass-through modes.
    pub const fn kernel(self) -> Option<&'static Kernel> {
        match self.mode() {
            Mode::Diffuse(kernel) => Some(kernel),
            _ => None,
        }
    }

    /// Diffusion taps; empty for pass-through modes.
    pub const fn taps(self) -> &'static [Tap] {
        match self.kernel() {
            Some(kernel) => kernel.taps,
            None => &[],
        }
    }

    /// Whether this algorithm runs the error diffusion pass.
    pub const fn diffuses(self) -> bool {
        matches!(self.mode(), Mode::Diffuse(_))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    input: String,
}

impl ParseAlgorithmError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Algorithm::ALL.iter().map(|a| a.slug()).collect();
        write!(
            f,
            "unknown dithering algorithm '{}' (expected one of: {})",
            self.input,
            known.join(", ")
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parse a label or slug, case-insensitively.
    ///
    /// Spaces and underscores are treated as hyphens, so
    /// `"Floyd-Steinberg"`, `"floyd_steinberg"` and `"floyd steinberg"` are
    /// all accepted. `"none"` is an alias for [`Algorithm::Copy`] and `"jjn"`
    /// for [`Algorithm::JarvisJudiceNinke`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        let algorithm = match normalized.as_str() {
            "none" => Algorithm::Copy,
            "greyscale" => Algorithm::Grayscale,
            "threshold" => Algorithm::Thresholding,
            "jjn" => Algorithm::JarvisJudiceNinke,
            other => Algorithm::ALL
                .into_iter()
                .find(|a| a.slug() == other)
                .ok_or_else(|| ParseAlgorithmError {
                    input: s.to_string(),
                })?,
        };
        Ok(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[test]
    fn test_label_and_slug_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.label().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.slug().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_from_str_normalization_and_aliases() {
        assert_eq!("FLOYD_STEINBERG".parse::<Algorithm>(), Ok(Algorithm::FloydSteinberg));
        assert_eq!(" jarvis judice ninke ".parse::<Algorithm>(), Ok(Algorithm::JarvisJudiceNinke));
        assert_eq!("jjn".parse::<Algorithm>(), Ok(Algorithm::JarvisJudiceNinke));
        assert_eq!("None".parse::<Algorithm>(), Ok(Algorithm::Copy));
        assert_eq!("greyscale".parse::<Algorithm>(), Ok(Algorithm::Grayscale));
        assert_eq!("threshold".parse::<Algorithm>(), Ok(Algorithm::Thresholding));
    }

    #[test]
    fn test_from_str_unknown_fails_loudly() {
        let err = "sierra".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.input(), "sierra");
        let message = err.to_string();
        assert!(message.starts_with("unknown dithering algorithm 'sierra'"));
        assert!(message.contains("floyd-steinberg"));
    }

    #[test]
    fn test_pass_through_modes_have_no_taps() {
        for algorithm in [Algorithm::Copy, Algorithm::Grayscale, Algorithm::Thresholding] {
            assert!(algorithm.taps().is_empty(), "{algorithm} should not diffuse");
            assert!(algorithm.kernel().is_none());
            assert!(!algorithm.diffuses());
        }
    }

    #[test]
    fn test_diffusing_modes_map_to_kernels() {
        assert_eq!(Algorithm::Atkinson.kernel(), Some(&ATKINSON));
        assert_eq!(Algorithm::Aman.kernel(), Some(&AMAN));
        assert_eq!(Algorithm::FloydSteinberg.kernel(), Some(&FLOYD_STEINBERG));
        assert_eq!(
            Algorithm::JarvisJudiceNinke.kernel(),
            Some(&JARVIS_JUDICE_NINKE)
        );
        assert_eq!(Algorithm::Stucki.kernel(), Some(&STUCKI));
        assert_eq!(Algorithm::Burkes.kernel(), Some(&BURKES));

        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.diffuses()) {
            let kernel = algorithm.kernel().unwrap();
            assert_eq!(kernel.name, algorithm.label());
            assert_eq!(algorithm.taps(), kernel.taps);
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.mode(), algorithm.mode());
            assert_eq!(algorithm.taps(), algorithm.taps());
        }
    }

    #[test]
    fn test_default_is_atkinson() {
        assert_eq!(Algorithm::default(), Algorithm::Atkinson);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Algorithm::JarvisJudiceNinke.to_string(), "Jarvis-Judice-Ninke");
    }
}
