//! Terminal rendering for figures and readings.

use colored::Colorize;
use zy_canon::{Hexagram, Reading};
use zy_cast::{Figure, Polarity};

const YANG_BAR: &str = "━━━━━━━━━";
const YIN_BAR: &str = "━━━   ━━━";

/// Print a figure top line first, with changing marks and coin sums.
///
/// Positions in `focus` are emphasized; per tradition that is only the
/// single changing line of a one-line reading.
pub fn print_figure(figure: &Figure, focus: &[u8]) {
    for (idx, line) in figure.lines().iter().enumerate().rev() {
        let position = (idx + 1) as u8;
        let bar = match line.polarity {
            Polarity::Yang => YANG_BAR,
            Polarity::Yin => YIN_BAR,
        };
        let mark = if line.changing { "×" } else { " " };
        let row = format!("  {position}  {bar}  {mark} {}", line.sum);
        if focus.contains(&position) {
            println!("{}", row.bold());
        } else {
            println!("{row}");
        }
    }
}

/// Print one record: title, key, judgment, and image.
pub fn print_record(label: &str, hexagram: &Hexagram) {
    println!("  {}", label.to_uppercase().dimmed());
    let title = if hexagram.glyph.is_empty() {
        hexagram.title()
    } else {
        format!("{} {}", hexagram.glyph, hexagram.title())
    };
    println!("  {}", title.bold());
    println!("  {}", format!("key: {}", hexagram.key).dimmed());
    if !hexagram.judgment.is_empty() {
        println!();
        print_text_block(&hexagram.judgment);
    }
    if !hexagram.image.is_empty() {
        println!();
        print_text_block(&hexagram.image);
    }
}

/// Print the full reading: primary, relating, and changing-line commentary.
pub fn print_reading(reading: &Reading) {
    print_record("Primary hexagram", &reading.primary);
    if let Some(relating) = &reading.relating {
        println!();
        print_record("Relating hexagram", relating);
    }
    print_changing_lines(reading);
}

/// Changing-line commentary, always from the primary record. A single
/// changing line is the focus of the reading; several read bottom to top.
fn print_changing_lines(reading: &Reading) {
    if reading.changing_positions.is_empty() {
        return;
    }
    println!();
    if let Some(focus) = reading.focus_line() {
        println!("  {}", format!("focus line: {focus}").to_uppercase().dimmed());
        print_line_commentary(&reading.primary, focus);
    } else {
        println!("  {}", "CHANGING LINES".dimmed());
        for &position in &reading.changing_positions {
            println!("  {}", format!("Line {position}").bold());
            print_line_commentary(&reading.primary, position);
        }
    }
}

fn print_line_commentary(hexagram: &Hexagram, position: u8) {
    match hexagram.line_text(position) {
        Some(commentary) => {
            if !commentary.text.is_empty() {
                print_text_block(&commentary.text);
            }
            if !commentary.comments.is_empty() {
                print_text_block(&commentary.comments);
            }
        }
        None => println!("  No line text found."),
    }
}

fn print_text_block(text: &str) {
    for line in text.lines() {
        println!("  {}", line.trim_end());
    }
}
