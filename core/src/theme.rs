//! Gradient palettes shared by every page surface
//!
//! Six named palettes drive the site's look. Each page declares one;
//! headings and stat values sample the gradient per character, and accent
//! colors mark CTAs and highlights.

/// A truecolor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The six site palettes, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Hero,
    EWaste,
    Epr,
    Wind,
    Batteries,
    Impact,
}

/// Gradient stops plus the accent used for highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub stops: [Rgb; 3],
    pub accent: Rgb,
}

const HERO: Theme = Theme {
    name: "Hero",
    stops: [
        Rgb::new(0x00, 0x98, 0xF0),
        Rgb::new(0x15, 0xD1, 0xA0),
        Rgb::new(0xFF, 0xF3, 0x00),
    ],
    accent: Rgb::new(0x11, 0x11, 0x11),
};

const EWASTE: Theme = Theme {
    name: "E‑Waste",
    stops: [
        Rgb::new(0x00, 0x98, 0xF0),
        Rgb::new(0x15, 0xD1, 0xA0),
        Rgb::new(0x00, 0xE5, 0xFF),
    ],
    accent: Rgb::new(0x00, 0x98, 0xF0),
};

const EPR: Theme = Theme {
    name: "EPR",
    stops: [
        Rgb::new(0x15, 0xD1, 0xA0),
        Rgb::new(0x79, 0xF2, 0xC0),
        Rgb::new(0xFF, 0xF3, 0x00),
    ],
    accent: Rgb::new(0x15, 0xD1, 0xA0),
};

const WIND: Theme = Theme {
    name: "Wind",
    stops: [
        Rgb::new(0x6E, 0xC8, 0xFF),
        Rgb::new(0x00, 0x98, 0xF0),
        Rgb::new(0xB0, 0xFF, 0x72),
    ],
    accent: Rgb::new(0x6E, 0xC8, 0xFF),
};

const BATTERIES: Theme = Theme {
    name: "Batteries",
    stops: [
        Rgb::new(0xFF, 0xF3, 0x00),
        Rgb::new(0x00, 0xE5, 0xFF),
        Rgb::new(0x15, 0xD1, 0xA0),
    ],
    accent: Rgb::new(0x00, 0xB2, 0xFF),
};

const IMPACT: Theme = Theme {
    name: "Impact",
    stops: [
        Rgb::new(0x11, 0x11, 0x11),
        Rgb::new(0x42, 0x42, 0x42),
        Rgb::new(0xBD, 0xBD, 0xBD),
    ],
    accent: Rgb::new(0x11, 0x11, 0x11),
};

impl Palette {
    /// The theme behind this palette.
    pub const fn theme(self) -> &'static Theme {
        match self {
            Palette::Hero => &HERO,
            Palette::EWaste => &EWASTE,
            Palette::Epr => &EPR,
            Palette::Wind => &WIND,
            Palette::Batteries => &BATTERIES,
            Palette::Impact => &IMPACT,
        }
    }

    /// Rotation through the four service palettes, used by stat cards and
    /// FAQ questions so neighbouring items take different gradients.
    pub const fn rotating(i: usize) -> Palette {
        match i % 4 {
            0 => Palette::EWaste,
            1 => Palette::Epr,
            2 => Palette::Wind,
            _ => Palette::Batteries,
        }
    }
}

impl Theme {
    /// Sample the gradient at `t` in `[0, 1]`, piecewise linear across the
    /// three stops.
    pub fn sample(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let (from, to, local) = if t <= 0.5 {
            (self.stops[0], self.stops[1], t * 2.0)
        } else {
            (self.stops[1], self.stops[2], (t - 0.5) * 2.0)
        };
        Rgb {
            r: lerp(from.r, to.r, local),
            g: lerp(from.g, to.g, local),
            b: lerp(from.b, to.b, local),
        }
    }

    /// Color for character `i` of a run of `len` characters.
    pub fn color_at(&self, i: usize, len: usize) -> Rgb {
        if len <= 1 {
            self.stops[0]
        } else {
            self.sample(i as f32 / (len - 1) as f32)
        }
    }

    /// Accent adjusted for dark terminal backgrounds.
    pub const fn terminal_accent(&self) -> Rgb {
        terminal_color(self.accent)
    }

    /// Gradient stops adjusted for dark terminal backgrounds.
    pub const fn terminal_stops(&self) -> [Rgb; 3] {
        [
            terminal_color(self.stops[0]),
            terminal_color(self.stops[1]),
            terminal_color(self.stops[2]),
        ]
    }
}

/// The web palettes assume dark ink on a light page; terminals draw light
/// on dark. Near-black values render inverted so they stay legible.
const fn terminal_color(c: Rgb) -> Rgb {
    if (c.r as u16) + (c.g as u16) + (c.b as u16) < 150 {
        Rgb::new(255 - c.r, 255 - c.g, 255 - c.b)
    } else {
        c
    }
}

fn lerp(a: u8, b: u8, f: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * f).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_hits_the_stops() {
        let theme = Palette::Hero.theme();
        assert_eq!(theme.sample(0.0), theme.stops[0]);
        assert_eq!(theme.sample(0.5), theme.stops[1]);
        assert_eq!(theme.sample(1.0), theme.stops[2]);
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let theme = Palette::Wind.theme();
        assert_eq!(theme.sample(-1.0), theme.stops[0]);
        assert_eq!(theme.sample(2.0), theme.stops[2]);
    }

    #[test]
    fn gradient_spans_full_text() {
        let theme = Palette::EWaste.theme();
        assert_eq!(theme.color_at(0, 10), theme.stops[0]);
        assert_eq!(theme.color_at(9, 10), theme.stops[2]);
    }

    #[test]
    fn single_character_takes_first_stop() {
        let theme = Palette::Epr.theme();
        assert_eq!(theme.color_at(0, 1), theme.stops[0]);
        assert_eq!(theme.color_at(0, 0), theme.stops[0]);
    }

    #[test]
    fn rotation_cycles_the_service_palettes() {
        assert_eq!(Palette::rotating(0), Palette::EWaste);
        assert_eq!(Palette::rotating(1), Palette::Epr);
        assert_eq!(Palette::rotating(2), Palette::Wind);
        assert_eq!(Palette::rotating(3), Palette::Batteries);
        assert_eq!(Palette::rotating(4), Palette::EWaste);
    }

    #[test]
    fn dark_accents_invert_on_terminals() {
        let hero = Palette::Hero.theme();
        assert_eq!(hero.terminal_accent(), Rgb::new(0xEE, 0xEE, 0xEE));
        let ewaste = Palette::EWaste.theme();
        assert_eq!(ewaste.terminal_accent(), ewaste.accent);
    }

    #[test]
    fn impact_gradient_stays_legible_on_terminals() {
        let impact = Palette::Impact.theme();
        let stops = impact.terminal_stops();
        assert_eq!(stops[0], Rgb::new(0xEE, 0xEE, 0xEE));
        assert_eq!(stops[1], impact.stops[1]);
        assert_eq!(stops[2], impact.stops[2]);
        let bright = Palette::Wind.theme();
        assert_eq!(bright.terminal_stops(), bright.stops);
    }
}
