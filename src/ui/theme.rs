use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar: Color,          // Idle bar
    pub compare: Color,      // Primary highlighted index
    pub swap: Color,         // Secondary highlighted index
    pub pivot: Color,        // Quick sort pivot
    pub sorted: Color,       // Certified position
    pub inactive: Color,     // Outside the active range
    pub zone_left: Color,    // Left half of a merge
    pub zone_right: Color,   // Right half of a merge
    pub zone_merged: Color,  // Already merged positions
    pub run_even: Color,     // Alternating Tim runs
    pub run_odd: Color,
    pub digits: [Color; 10], // Radix bucket colors
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    bar: Color::Rgb(137, 180, 250),
    compare: Color::Rgb(249, 226, 175),
    swap: Color::Rgb(243, 139, 168),
    pivot: Color::Rgb(203, 166, 247),
    sorted: Color::Rgb(166, 227, 161),
    inactive: Color::Rgb(69, 71, 90),
    zone_left: Color::Rgb(116, 199, 236),
    zone_right: Color::Rgb(245, 194, 231),
    zone_merged: Color::Rgb(148, 226, 213),
    run_even: Color::Rgb(137, 180, 250),
    run_odd: Color::Rgb(180, 190, 254),
    digits: [
        Color::Rgb(243, 139, 168),
        Color::Rgb(235, 160, 172),
        Color::Rgb(250, 179, 135),
        Color::Rgb(249, 226, 175),
        Color::Rgb(166, 227, 161),
        Color::Rgb(148, 226, 213),
        Color::Rgb(137, 220, 235),
        Color::Rgb(116, 199, 236),
        Color::Rgb(137, 180, 250),
        Color::Rgb(203, 166, 247),
    ],
};
