//! Table rendering using comfy-table

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

/// Letter grades as the service reports them: A+, A, A-, B..F, T, M
fn is_grade(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => matches!(c, 'A'..='F' | 'T' | 'M'),
        (Some('A'), Some('+' | '-'), None) => true,
        _ => false,
    }
}

fn grade_color(grade: &str) -> Color {
    match grade.chars().next() {
        Some('A') => Color::Green,
        Some('B') => Color::Cyan,
        Some('C' | 'D' | 'E') => Color::Yellow,
        _ => Color::Red,
    }
}

fn body_cell(text: &str) -> Cell {
    let cell = Cell::new(text);
    if is_grade(text) {
        cell.fg(grade_color(text)).add_attribute(Attribute::Bold)
    } else if text.starts_with('✓') {
        cell.fg(Color::Green)
    } else if text.starts_with('✗') {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Render rows under bold headers, each line indented by four spaces
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan)),
        );
    for row in rows {
        table.add_row(row.iter().map(|text| body_cell(text)));
    }

    let mut out = String::new();
    for line in table.lines() {
        out.push_str("    ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_table(headers, rows));
}
