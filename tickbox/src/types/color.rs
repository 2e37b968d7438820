#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `top` over `self` with the given opacity (0.0 to 1.0).
    pub fn blend(self, top: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        Rgb::new(
            lerp_u8(self.r, top.r, alpha),
            lerp_u8(self.g, top.g, alpha),
            lerp_u8(self.b, top.b, alpha),
        )
    }
}

impl Color {
    pub const CLEAR: Color = Color::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Build a color from unit-range sRGB components, e.g. `(0.4, 0.4, 0.4, 1.0)`.
    pub fn from_components(r: f32, g: f32, b: f32, a: f32) -> Self {
        use palette::Srgb;

        let srgb = Srgb::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::Rgba { r, g, b, a }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgba { a, .. } => *a,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a: alpha },
        }
    }

    /// True when painting this color leaves the destination untouched.
    pub fn is_clear(&self) -> bool {
        self.alpha() <= 0.0
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgba { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

fn lerp_u8(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u8
}
