//! Indexed-colour palettes.  A frame stores palette indices, not grey
//! levels, so the choice of palette decides how the evaluator's
//! intensities are quantised before they reach the GIF.

use std::fmt;
use std::str::FromStr;

/// The two palettes a frame can be written with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    /// 256 grey levels; index `i` is grey level `i`.  Keeps the full
    /// banding of the escape-time intensities.
    Grayscale,
    /// White at index 0, black at index 1.  Every intensity collapses
    /// to whichever of the two it is nearer.
    Bilevel,
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Grayscale
    }
}

#[allow(clippy::len_without_is_empty)]
impl Palette {
    /// Number of entries in the colour table.
    pub fn len(self) -> usize {
        match self {
            Palette::Grayscale => 256,
            Palette::Bilevel => 2,
        }
    }

    /// Quantise a grey level into an index of this palette.
    #[inline]
    pub fn index_of(self, intensity: u8) -> u8 {
        match self {
            Palette::Grayscale => intensity,
            Palette::Bilevel => {
                if intensity >= 128 {
                    0
                } else {
                    1
                }
            }
        }
    }

    /// The grey level a palette index stands for.
    pub fn gray_of(self, index: u8) -> u8 {
        match self {
            Palette::Grayscale => index,
            Palette::Bilevel => {
                if index == 0 {
                    255
                } else {
                    0
                }
            }
        }
    }

    /// The palette as a packed RGB colour table, as GIF expects it.
    pub fn rgb_table(self) -> Vec<u8> {
        (0..self.len())
            .flat_map(|i| {
                let g = self.gray_of(i as u8);
                vec![g, g, g]
            })
            .collect()
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gray" | "grey" => Ok(Palette::Grayscale),
            "mono" => Ok(Palette::Bilevel),
            _ => Err(format!("unknown palette '{}', expected gray or mono", s)),
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Palette::Grayscale => write!(f, "gray"),
            Palette::Bilevel => write!(f, "mono"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_is_the_identity() {
        for i in 0..=255u8 {
            assert_eq!(Palette::Grayscale.index_of(i), i);
            assert_eq!(Palette::Grayscale.gray_of(i), i);
        }
    }

    #[test]
    fn bilevel_picks_the_nearer_colour() {
        let p = Palette::Bilevel;
        assert_eq!(p.index_of(255), 0);
        assert_eq!(p.index_of(128), 0);
        assert_eq!(p.index_of(127), 1);
        assert_eq!(p.index_of(0), 1);
        assert_eq!(p.gray_of(0), 255);
        assert_eq!(p.gray_of(1), 0);
    }

    #[test]
    fn colour_tables_have_three_bytes_per_entry() {
        let gray = Palette::Grayscale.rgb_table();
        assert_eq!(gray.len(), 768);
        assert_eq!(&gray[300..303], &[100, 100, 100]);
        assert_eq!(Palette::Bilevel.rgb_table(), vec![255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn parses_names() {
        assert_eq!("gray".parse::<Palette>(), Ok(Palette::Grayscale));
        assert_eq!("grey".parse::<Palette>(), Ok(Palette::Grayscale));
        assert_eq!("mono".parse::<Palette>(), Ok(Palette::Bilevel));
        assert!("rainbow".parse::<Palette>().is_err());
        assert_eq!(Palette::Bilevel.to_string(), "mono");
    }
}
