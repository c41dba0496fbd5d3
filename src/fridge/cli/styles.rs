//! Styles for the fridge CLI.
//!
//! Code refers to styles by what they mean (a header, a muted timestamp, a
//! section), never by colour, so the palette can change in one place.

use console::Style;
use fridge::model::Section;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
/// Quantity of one: can only be removed, not consumed.
pub static LAST_UNIT: Lazy<Style> = Lazy::new(|| Style::new().red().bold());

static FREEZER: Lazy<Style> = Lazy::new(|| Style::new().cyan());
static MEAT: Lazy<Style> = Lazy::new(|| Style::new().red());
static COOLING: Lazy<Style> = Lazy::new(|| Style::new().blue());
static CRISPER: Lazy<Style> = Lazy::new(|| Style::new().green());

pub fn section(section: Section) -> &'static Style {
    match section {
        Section::Freezer => &*FREEZER,
        Section::Meat => &*MEAT,
        Section::Cooling => &*COOLING,
        Section::Crisper => &*CRISPER,
    }
}

/// Apply a style only when colour output is wanted.
pub fn paint(style: &Style, text: &str, use_color: bool) -> String {
    if use_color {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}
