/// Render a temperature as its shortest round-trippable decimal form,
/// keeping a trailing `.0` on integral values so rows compare equal against
/// previously produced summary files.
pub fn format_temperature(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') && !text.contains('e') {
        text.push_str(".0");
    }
    text
}
