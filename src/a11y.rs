//! Accessibility helpers: WCAG contrast checks, keyboard focus movement and a
//! model of the ARIA live region used for announcements.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const AA_RATIO: f64 = 4.5;
const AAA_RATIO: f64 = 7.0;
const AA_LARGE_RATIO: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and a handful of CSS names.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim().to_ascii_lowercase();
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::new(input));
        }
        if let Some(body) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_function(body).ok_or_else(|| ColorParseError::new(input));
        }
        named_color(&value).ok_or_else(|| ColorParseError::new(input))
    }

    /// WCAG 2.x relative luminance.
    pub fn relative_luminance(self) -> f64 {
        let channel = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut digits = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgb::new(digits.next()??, digits.next()??, digits.next()??))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Rgb> {
    let parts: Vec<u8> = body
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [r, g, b] => Some(Rgb::new(*r, *g, *b)),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb::new(0, 0, 0),
        "white" => Rgb::new(255, 255, 255),
        "red" => Rgb::new(255, 0, 0),
        "green" => Rgb::new(0, 128, 0),
        "blue" => Rgb::new(0, 0, 255),
        "yellow" => Rgb::new(255, 255, 0),
        "gray" | "grey" => Rgb::new(128, 128, 128),
        "silver" => Rgb::new(192, 192, 192),
        "navy" => Rgb::new(0, 0, 128),
        "orange" => Rgb::new(255, 165, 0),
        "purple" => Rgb::new(128, 0, 128),
        _ => return None,
    };
    Some(rgb)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised color {:?}", self.input)
    }
}

impl std::error::Error for ColorParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Rounded to two decimals.
    pub ratio: f64,
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AALarge")]
    pub aa_large: bool,
}

/// Compliance flags are computed on the unrounded ratio.
pub fn contrast(foreground: Rgb, background: Rgb) -> ContrastReport {
    let l1 = foreground.relative_luminance();
    let l2 = background.relative_luminance();
    let ratio = (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05);
    ContrastReport {
        ratio: (ratio * 100.0).round() / 100.0,
        aa: ratio >= AA_RATIO,
        aaa: ratio >= AAA_RATIO,
        aa_large: ratio >= AA_LARGE_RATIO,
    }
}

pub fn check_contrast(foreground: &str, background: &str) -> Result<ContrastReport, ColorParseError> {
    Ok(contrast(Rgb::parse(foreground)?, Rgb::parse(background)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(NavKey::ArrowUp),
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowLeft" => Some(NavKey::ArrowLeft),
            "ArrowRight" => Some(NavKey::ArrowRight),
            "Home" => Some(NavKey::Home),
            "End" => Some(NavKey::End),
            _ => None,
        }
    }
}

/// Roving focus inside a radio group or menu. Arrow keys wrap at both ends.
pub fn roving_focus(current: usize, len: usize, key: NavKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    let next = match key {
        NavKey::ArrowDown | NavKey::ArrowRight => (current + 1) % len,
        NavKey::ArrowUp | NavKey::ArrowLeft => (current + len - 1) % len,
        NavKey::Home => 0,
        NavKey::End => len - 1,
    };
    Some(next)
}

/// Tab cycling inside a modal or menu. `None` as `current` means focus is
/// outside the container and enters at the first (or last) element.
pub fn trap_focus(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current.map(|i| i.min(len - 1)), shift) {
        (None, false) => 0,
        (None, true) => len - 1,
        (Some(i), false) if i == len - 1 => 0,
        (Some(i), false) => i + 1,
        (Some(0), true) => len - 1,
        (Some(i), true) => i - 1,
    };
    Some(next)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    pub fn as_str(self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveRegion {
    pub id: &'static str,
    pub politeness: Politeness,
    pub text: String,
}

/// Announcements kept in [`Announcer::history`]; older ones are dropped.
pub const HISTORY_LIMIT: usize = 50;

/// Owns a live region that only comes into existence on first use.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    id: &'static str,
    region: Option<LiveRegion>,
    history: Vec<String>,
}

impl Announcer {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            region: None,
            history: Vec::new(),
        }
    }

    pub fn announce(&mut self, message: impl Into<String>) {
        self.announce_with(message, Politeness::Polite);
    }

    /// Clears the region before writing so repeated identical messages are
    /// still read out.
    pub fn announce_with(&mut self, message: impl Into<String>, politeness: Politeness) {
        let id = self.id;
        let region = self.region.get_or_insert_with(|| LiveRegion {
            id,
            politeness,
            text: String::new(),
        });
        region.text.clear();
        region.politeness = politeness;
        let message = message.into();
        region.text.push_str(&message);
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(message);
    }

    pub fn region(&self) -> Option<&LiveRegion> {
        self.region.as_ref()
    }

    pub fn last(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.text.as_str())
    }

    /// The most recent announcements, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_on_white_is_maximum_contrast() {
        let report = check_contrast("#000", "white").unwrap();
        assert_eq!(report.ratio, 21.0);
        assert!(report.aa && report.aaa && report.aa_large);
    }

    #[test]
    fn identical_colors_fail_everything() {
        let report = check_contrast("#777777", "rgb(119, 119, 119)").unwrap();
        assert_eq!(report.ratio, 1.0);
        assert!(!report.aa_large);
    }

    #[test]
    fn mid_grey_passes_large_text_only() {
        // #767676 on white is the classic 4.54 AA boundary; #949494 sits near 3.
        let report = check_contrast("#949494", "#ffffff").unwrap();
        assert!(report.aa_large);
        assert!(!report.aa);
        let report = check_contrast("#767676", "#ffffff").unwrap();
        assert!(report.aa);
        assert!(!report.aaa);
    }

    #[test]
    fn rejects_garbage_colors() {
        assert!(Rgb::parse("#12").is_err());
        assert!(Rgb::parse("rgb(1, 2)").is_err());
        assert!(Rgb::parse("rgb(300, 0, 0)").is_err());
        assert!(Rgb::parse("chartreuse-ish").is_err());
        assert_eq!(Rgb::parse("#FfF").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn roving_focus_wraps() {
        assert_eq!(roving_focus(2, 3, NavKey::ArrowDown), Some(0));
        assert_eq!(roving_focus(0, 3, NavKey::ArrowLeft), Some(2));
        assert_eq!(roving_focus(1, 3, NavKey::End), Some(2));
        assert_eq!(roving_focus(0, 0, NavKey::ArrowDown), None);
    }

    #[test]
    fn focus_trap_cycles_both_directions() {
        assert_eq!(trap_focus(None, 4, false), Some(0));
        assert_eq!(trap_focus(Some(3), 4, false), Some(0));
        assert_eq!(trap_focus(Some(0), 4, true), Some(3));
        assert_eq!(trap_focus(Some(2), 4, true), Some(1));
        assert_eq!(trap_focus(None, 0, true), None);
    }

    #[test]
    fn focus_trap_clamps_stale_indices() {
        assert_eq!(trap_focus(Some(usize::MAX), 4, false), Some(0));
        assert_eq!(trap_focus(Some(usize::MAX), 4, true), Some(2));
        assert_eq!(trap_focus(Some(9), 1, false), Some(0));
    }

    #[test]
    fn announcer_creates_region_lazily() {
        let mut announcer = Announcer::new("app-announcer");
        assert!(announcer.region().is_none());
        announcer.announce("Greeting updated successfully");
        announcer.announce_with("Error", Politeness::Assertive);
        let region = announcer.region().unwrap();
        assert_eq!(region.id, "app-announcer");
        assert_eq!(region.text, "Error");
        assert_eq!(region.politeness, Politeness::Assertive);
        assert_eq!(announcer.history().len(), 2);
    }

    #[test]
    fn announcer_history_is_capped() {
        let mut announcer = Announcer::new("app-announcer");
        for n in 0..HISTORY_LIMIT + 5 {
            announcer.announce(format!("message {n}"));
        }
        assert_eq!(announcer.history().len(), HISTORY_LIMIT);
        assert_eq!(announcer.history()[0], "message 5");
        assert_eq!(announcer.last(), Some(format!("message {}", HISTORY_LIMIT + 4).as_str()));
    }
}
