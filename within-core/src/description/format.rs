/// Formats a distance in meters for an instruction.
///
/// Above 9999 m whole kilometers are used, above 999 m kilometers with one
/// decimal, otherwise whole meters.
pub fn format_distance(meters: f64) -> String {
    if meters > 9999.0 {
        format!("{:.0} km", meters / 1000.0)
    } else if meters > 999.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{meters:.0} m")
    }
}
