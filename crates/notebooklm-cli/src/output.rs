use serde::Serialize;

use crate::error::CliError;

pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

/// Renders `{"status": <status>}` for commands with no payload.
pub fn render_status(status: &str, pretty: bool) -> Result<(), CliError> {
    render(&serde_json::json!({ "status": status }), pretty)
}
