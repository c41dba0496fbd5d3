//! # Rendering Module
//!
//! Turns groceries, items and messages into terminal text. Every `render_*`
//! function returns a `String` and takes `use_color` explicitly, so output can
//! be checked in tests without a terminal; the `print_*` wrappers decide colour
//! from the environment.

use super::styles::{self, paint, HEADER, ID, LAST_UNIT, MUTED};
use chrono::NaiveDate;
use colored::*;
use fridge::api::{CmdMessage, MessageLevel};
use fridge::config::FridgeConfig;
use fridge::model::{format_date, Grocery, Item};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest the item column may get before names are truncated.
pub const ITEM_COL_MAX_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";

fn use_color() -> bool {
    console::colors_enabled()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_groceries(rows: &[Grocery], today: NaiveDate) {
    print!("{}", render_grocery_table(rows, today, use_color()));
}

pub fn print_grocery(grocery: &Grocery, today: NaiveDate) {
    print!("{}", render_grocery_detail(grocery, today, use_color()));
}

pub fn print_items(items: &[Item]) {
    print!("{}", render_item_table(items, use_color()));
}

pub fn print_config(config: &FridgeConfig) {
    print!("{}", render_config(config));
}

pub fn render_config(config: &FridgeConfig) -> String {
    FridgeConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn render_grocery_table(rows: &[Grocery], today: NaiveDate, use_color: bool) -> String {
    if rows.is_empty() {
        return "No groceries found.\n".to_string();
    }

    let id_width = rows
        .iter()
        .map(|g| g.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let item_width = rows
        .iter()
        .map(|g| g.item_name().width())
        .max()
        .unwrap_or(0)
        .clamp("ITEM".len(), ITEM_COL_MAX_WIDTH);
    let qty_width = rows
        .iter()
        .map(|g| g.quantity.to_string().len())
        .max()
        .unwrap_or(0)
        .max("QTY".len());
    let section_width = "SECTION".len();

    let mut out = String::new();
    let header = [
        pad_left("ID", id_width),
        pad_right("ITEM", item_width),
        pad_left("QTY", qty_width),
        pad_right("SECTION", section_width),
        "BOUGHT".to_string(),
    ]
    .join(COLUMN_GAP);
    out.push_str(&paint(&HEADER, &header, use_color));
    out.push('\n');

    for g in rows {
        let qty = pad_left(&g.quantity.to_string(), qty_width);
        let qty = if g.quantity <= 1 {
            paint(&LAST_UNIT, &qty, use_color)
        } else {
            qty
        };
        let line = [
            paint(&ID, &pad_left(&g.id.to_string(), id_width), use_color),
            pad_right(&truncate_to_width(g.item_name(), item_width), item_width),
            qty,
            paint(
                styles::section(g.section),
                &pad_right(g.section.as_str(), section_width),
                use_color,
            ),
            paint(&MUTED, &g.days_ago_label(today), use_color),
        ]
        .join(COLUMN_GAP);
        out.push_str(&line);
        out.push('\n');
    }

    out
}

pub fn render_grocery_detail(grocery: &Grocery, today: NaiveDate, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        paint(&ID, &grocery.id.to_string(), use_color),
        paint(&HEADER, grocery.item_name(), use_color)
    ));
    out.push_str(&format!("  quantity:  {}\n", grocery.quantity));
    out.push_str(&format!(
        "  section:   {}\n",
        paint(styles::section(grocery.section), grocery.section.as_str(), use_color)
    ));
    out.push_str(&format!(
        "  bought:    {} ({})\n",
        format_date(grocery.purchase_date),
        paint(&MUTED, &grocery.days_ago_label(today), use_color)
    ));
    out.push_str(&format!(
        "  expires:   {}\n",
        if grocery.item.can_expire { "yes" } else { "no" }
    ));
    out
}

pub fn render_item_table(items: &[Item], use_color: bool) -> String {
    if items.is_empty() {
        return "No items in the catalogue. Run `fridge init` to add the defaults.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.name.width())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    let header = format!("{}{}EXPIRES", pad_right("NAME", name_width), COLUMN_GAP);
    out.push_str(&paint(&HEADER, &header, use_color));
    out.push('\n');
    for item in items {
        let expires = if item.can_expire { "yes" } else { "no" };
        out.push_str(&format!(
            "{}{}{}\n",
            pad_right(&item.name, name_width),
            COLUMN_GAP,
            expires
        ));
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
