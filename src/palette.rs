//! Named colors for the chart lines.
//!
//! A [`Palette`] is an ordered, immutable list of colors. Series `i` of a chart is drawn
//! with the color at index `i`, so the palette must hold at least as many colors as
//! there are series.

use std::fmt;
use std::str::FromStr;

use plotters::style::RGBColor;

/// Colors that can be requested by name, the first nine form the default palette.
const KNOWN_COLORS: [(&str, (u8, u8, u8)); 17] = [
    ("orange", (255, 165, 0)),
    ("green", (0, 128, 0)),
    ("red", (255, 0, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("pink", (255, 192, 203)),
    ("olive", (128, 128, 0)),
    ("cyan", (0, 255, 255)),
    ("blue", (0, 0, 255)),
    ("black", (0, 0, 0)),
    ("gray", (128, 128, 128)),
    ("magenta", (255, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("maroon", (128, 0, 0)),
    ("lime", (0, 255, 0)),
];

pub const DEFAULT_PALETTE: &str = "orange,green,red,purple,brown,pink,olive,cyan,blue";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    rgb: (u8, u8, u8),
}

impl NamedColor {
    /// Looks up a color by its (case insensitive) name.
    pub fn by_name(name: &str) -> Option<NamedColor> {
        let name = name.trim().to_ascii_lowercase();
        KNOWN_COLORS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(name, rgb)| NamedColor { name, rgb })
    }

    pub fn rgb(&self) -> RGBColor {
        RGBColor(self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<NamedColor>,
}

impl Palette {
    pub fn new(colors: Vec<NamedColor>) -> Self {
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn get(&self, index: usize) -> Option<&NamedColor> {
        self.colors.get(index)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = KNOWN_COLORS[..9]
            .iter()
            .map(|&(name, rgb)| NamedColor { name, rgb })
            .collect();
        Palette::new(colors)
    }
}

impl FromStr for Palette {
    type Err = String;

    /// Parses a comma separated list of color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| {
                NamedColor::by_name(name).ok_or_else(|| {
                    let known = KNOWN_COLORS
                        .iter()
                        .map(|(known, _)| *known)
                        .collect::<Vec<&str>>()
                        .join(", ");
                    format!("Unknown color '{}'. Try one of: {known}", name.trim())
                })
            })
            .collect::<Result<Vec<NamedColor>, String>>()?;
        if colors.is_empty() {
            return Err("The palette needs at least one color".to_string());
        }
        Ok(Palette::new(colors))
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.colors.iter().map(|c| c.name).collect::<Vec<&str>>();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(9, palette.len(), "The default palette has 9 colors");
        assert_eq!("orange", palette.get(0).unwrap().name);
        assert_eq!("blue", palette.get(8).unwrap().name);
        assert!(palette.get(9).is_none());
        assert_eq!(DEFAULT_PALETTE, palette.to_string());
    }

    #[test]
    fn test_by_name() {
        let olive = NamedColor::by_name(" Olive ").unwrap();
        assert_eq!("olive", olive.name);
        assert_eq!(RGBColor(128, 128, 0), olive.rgb());
        assert!(NamedColor::by_name("chartreuse").is_none());
    }

    #[test]
    fn test_parse_palette() {
        let palette: Palette = "red, blue,".parse().unwrap();
        assert_eq!(2, palette.len());
        assert_eq!("red", palette.get(0).unwrap().name);
        assert_eq!("blue", palette.get(1).unwrap().name);
    }

    #[test]
    fn test_parse_palette_errors() {
        let err = "red,chartreuse".parse::<Palette>().unwrap_err();
        assert!(
            err.starts_with("Unknown color 'chartreuse'"),
            "Unexpected error message: {err}"
        );
        assert!("".parse::<Palette>().is_err(), "An empty palette is invalid");
    }

    #[test]
    fn test_default_colors_are_distinct() {
        let palette = Palette::default();
        for i in 0..palette.len() {
            for j in (i + 1)..palette.len() {
                assert_ne!(palette.get(i), palette.get(j));
            }
        }
    }
}
