//! Duration formatting for player labels

/// Format whole seconds as `HH:MM:SS`
///
/// Every field is zero-padded to two digits. Hours are not wrapped, so very long
/// values simply grow the hour field.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
