//! JSON output formatter

use serde::Serialize;

/// Print any report type as pretty JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Grade lookup result as emitted in JSON mode
#[derive(Debug, Serialize)]
pub struct GradeOutput<'a> {
    pub host: &'a str,
    pub grade: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
