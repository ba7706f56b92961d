//! Grade display

use console::Style;

/// Color for a letter grade
fn grade_style(grade: &str) -> Style {
    match grade.chars().next() {
        Some('A') => Style::new().green(),
        Some('B') => Style::new().cyan(),
        Some('C') | Some('D') | Some('E') => Style::new().yellow(),
        _ => Style::new().red(),
    }
}

/// Format a prominent grade box to a string
pub fn format_grade(host: &str, grade: &str) -> String {
    let label = format!("{}  Grade: {}", host, grade);
    let width = label.chars().count() + 6;

    let top = format!("  ╔{}╗", "═".repeat(width));
    let mid = format!("  ║   {}   ║", label);
    let bot = format!("  ╚{}╝", "═".repeat(width));

    let color = grade_style(grade);
    let mut out = String::from("\n");
    out.push_str(&format!("{}\n", color.apply_to(&top)));
    out.push_str(&format!("{}\n", color.clone().bold().apply_to(&mid)));
    out.push_str(&format!("{}\n", color.apply_to(&bot)));
    out
}

/// Print a prominent grade box
pub fn print_grade(host: &str, grade: &str) {
    print!("{}", format_grade(host, grade));
    println!();
}

/// Print a compact grade line for one endpoint
pub fn print_grade_compact(label: &str, grade: &str) {
    let shown = if grade.is_empty() { "-" } else { grade };
    println!(
        "  {:<40} {}",
        label,
        grade_style(shown).bold().apply_to(shown)
    );
}
