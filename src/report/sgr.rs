//! ANSI "Select Graphic Rendition" parameters.
//!
//! `LS_COLORS` values are sequences of SGR parameters. Each parameter is
//! looked up in [`SGR_TABLE`] and folded into a [`Rendition`], which then
//! paints text through `colored`.

use bitflags::bitflags;
use colored::{Color, ColoredString, Colorize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attributes: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrEffect {
    Reset,
    Set(Attributes),
    Clear(Attributes),
    Foreground(Color),
    DefaultForeground,
    Background(Color),
    DefaultBackground,
}

const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

const BRIGHT_PALETTE: [Color; 8] = [
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

/// Parameter to effect, for every parameter with a fixed meaning.
pub const SGR_TABLE: &[(u8, SgrEffect)] = &[
    (0, SgrEffect::Reset),
    (1, SgrEffect::Set(Attributes::BOLD)),
    (2, SgrEffect::Set(Attributes::DIM)),
    (3, SgrEffect::Set(Attributes::ITALIC)),
    (4, SgrEffect::Set(Attributes::UNDERLINE)),
    (5, SgrEffect::Set(Attributes::BLINK)),
    (7, SgrEffect::Set(Attributes::REVERSE)),
    (8, SgrEffect::Set(Attributes::HIDDEN)),
    (9, SgrEffect::Set(Attributes::STRIKETHROUGH)),
    (22, SgrEffect::Clear(Attributes::BOLD.union(Attributes::DIM))),
    (23, SgrEffect::Clear(Attributes::ITALIC)),
    (24, SgrEffect::Clear(Attributes::UNDERLINE)),
    (25, SgrEffect::Clear(Attributes::BLINK)),
    (27, SgrEffect::Clear(Attributes::REVERSE)),
    (28, SgrEffect::Clear(Attributes::HIDDEN)),
    (29, SgrEffect::Clear(Attributes::STRIKETHROUGH)),
    (30, SgrEffect::Foreground(PALETTE[0])),
    (31, SgrEffect::Foreground(PALETTE[1])),
    (32, SgrEffect::Foreground(PALETTE[2])),
    (33, SgrEffect::Foreground(PALETTE[3])),
    (34, SgrEffect::Foreground(PALETTE[4])),
    (35, SgrEffect::Foreground(PALETTE[5])),
    (36, SgrEffect::Foreground(PALETTE[6])),
    (37, SgrEffect::Foreground(PALETTE[7])),
    (39, SgrEffect::DefaultForeground),
    (40, SgrEffect::Background(PALETTE[0])),
    (41, SgrEffect::Background(PALETTE[1])),
    (42, SgrEffect::Background(PALETTE[2])),
    (43, SgrEffect::Background(PALETTE[3])),
    (44, SgrEffect::Background(PALETTE[4])),
    (45, SgrEffect::Background(PALETTE[5])),
    (46, SgrEffect::Background(PALETTE[6])),
    (47, SgrEffect::Background(PALETTE[7])),
    (49, SgrEffect::DefaultBackground),
    (90, SgrEffect::Foreground(BRIGHT_PALETTE[0])),
    (91, SgrEffect::Foreground(BRIGHT_PALETTE[1])),
    (92, SgrEffect::Foreground(BRIGHT_PALETTE[2])),
    (93, SgrEffect::Foreground(BRIGHT_PALETTE[3])),
    (94, SgrEffect::Foreground(BRIGHT_PALETTE[4])),
    (95, SgrEffect::Foreground(BRIGHT_PALETTE[5])),
    (96, SgrEffect::Foreground(BRIGHT_PALETTE[6])),
    (97, SgrEffect::Foreground(BRIGHT_PALETTE[7])),
    (100, SgrEffect::Background(BRIGHT_PALETTE[0])),
    (101, SgrEffect::Background(BRIGHT_PALETTE[1])),
    (102, SgrEffect::Background(BRIGHT_PALETTE[2])),
    (103, SgrEffect::Background(BRIGHT_PALETTE[3])),
    (104, SgrEffect::Background(BRIGHT_PALETTE[4])),
    (105, SgrEffect::Background(BRIGHT_PALETTE[5])),
    (106, SgrEffect::Background(BRIGHT_PALETTE[6])),
    (107, SgrEffect::Background(BRIGHT_PALETTE[7])),
];

const STYLE_PAINTERS: &[(Attributes, fn(ColoredString) -> ColoredString)] = &[
    (Attributes::BOLD, <ColoredString as Colorize>::bold),
    (Attributes::DIM, <ColoredString as Colorize>::dimmed),
    (Attributes::ITALIC, <ColoredString as Colorize>::italic),
    (Attributes::UNDERLINE, <ColoredString as Colorize>::underline),
    (Attributes::BLINK, <ColoredString as Colorize>::blink),
    (Attributes::REVERSE, <ColoredString as Colorize>::reversed),
    (Attributes::HIDDEN, <ColoredString as Colorize>::hidden),
    (Attributes::STRIKETHROUGH, <ColoredString as Colorize>::strikethrough),
];

/// Looks up one parameter string. Leading zeros are accepted (`"01"` is
/// bold); anything unparsable or unlisted has no effect.
pub fn lookup(code: &str) -> Option<SgrEffect> {
    let code: u8 = code.trim().parse().ok()?;
    SGR_TABLE
        .iter()
        .find(|(parameter, _)| *parameter == code)
        .map(|(_, effect)| *effect)
}

/// Accumulated terminal state after a run of SGR parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rendition {
    pub attributes: Attributes,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Rendition {
    pub fn apply(&mut self, effect: SgrEffect) {
        match effect {
            SgrEffect::Reset => *self = Rendition::default(),
            SgrEffect::Set(attributes) => self.attributes.insert(attributes),
            SgrEffect::Clear(attributes) => self.attributes.remove(attributes),
            SgrEffect::Foreground(color) => self.foreground = Some(color),
            SgrEffect::DefaultForeground => self.foreground = None,
            SgrEffect::Background(color) => self.background = Some(color),
            SgrEffect::DefaultBackground => self.background = None,
        }
    }

    pub fn apply_code(&mut self, code: &str) {
        if let Some(effect) = lookup(code) {
            self.apply(effect);
        }
    }

    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut rendition = Rendition::default();
        for code in codes {
            rendition.apply_code(code);
        }
        rendition
    }

    /// Styles `text`; the result ends with a reset when displayed.
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(color) = self.foreground {
            painted = painted.color(color);
        }
        if let Some(color) = self.background {
            painted = painted.on_color(color);
        }
        for (attribute, painter) in STYLE_PAINTERS {
            if self.attributes.contains(*attribute) {
                painted = painter(painted);
            }
        }
        painted
    }
}
