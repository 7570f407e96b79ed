//! Participant color palette

/// Fixed ordered list of distinguishable participant colors
pub const PALETTE: [&str; 8] = [
    "#2563eb", // blue
    "#dc2626", // red
    "#16a34a", // green
    "#9333ea", // purple
    "#ea580c", // orange
    "#0891b2", // cyan
    "#db2777", // pink
    "#65a30d", // lime
];

/// Color for the participant at registry position `index`
///
/// # Examples
///
/// ```
/// use debatemap_domain::{color_for_index, PALETTE};
///
/// assert_eq!(color_for_index(0), PALETTE[0]);
/// assert_eq!(color_for_index(9), PALETTE[1]);
/// ```
pub fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
