//! Bar chart of the array in the current frame

use crate::snapshot::{Frame, MergeZones, RenderState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame as TerminalFrame,
};

/// Render the bars pane
pub fn render_bars_pane(
    frame: &mut TerminalFrame,
    area: Rect,
    current: Option<&Frame>,
    title: &str,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(current) = current.filter(|f| !f.array.is_empty()) else {
        let paragraph = ratatui::widgets::Paragraph::new("(no array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let len = current.array.len();
    let inner_width = area.width.saturating_sub(2) as usize;
    let (bar_width, bar_gap) = bar_geometry(inner_width, len);
    let heights = bar_heights(&current.array);

    let bars: Vec<Bar> = current
        .array
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(index, (value, height))| {
            let color = bar_color(current, index);
            let mut bar = Bar::default()
                .value(height)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if bar_width >= 2 {
                bar = bar.label(Line::from(index.to_string()));
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Bar width and gap that fit `len` bars into `width` columns
pub fn bar_geometry(width: usize, len: usize) -> (u16, u16) {
    if len == 0 {
        return (1, 0);
    }
    let gap = if width >= len * 3 { 1 } else { 0 };
    let bar = ((width.saturating_sub(gap * (len - 1))) / len).clamp(1, 12);
    (bar as u16, gap as u16)
}

/// Heights relative to the smallest value, so negative values still draw
pub fn bar_heights(array: &[i64]) -> Vec<u64> {
    let floor = array.iter().copied().min().unwrap_or(0).min(0);
    array
        .iter()
        .map(|&v| v.abs_diff(floor).saturating_add(1))
        .collect()
}

/// Color of the bar at `index`, highest priority first
pub fn bar_color(frame: &Frame, index: usize) -> Color {
    let outcome = &frame.outcome;
    if outcome.pivot == Some(index) {
        return DEFAULT_THEME.pivot;
    }
    if outcome.secondary == Some(index) {
        return DEFAULT_THEME.swap;
    }
    if outcome.primary == Some(index) {
        return DEFAULT_THEME.compare;
    }
    if frame.sorted.contains(index) {
        return DEFAULT_THEME.sorted;
    }

    match &frame.render {
        RenderState::Quick { range: Some(range) } if !range.contains(index) => {
            DEFAULT_THEME.inactive
        }
        RenderState::Merge { zones: Some(zones) } => zone_color(zones, index),
        RenderState::Tim {
            zones: Some(zones), ..
        } => zone_color(zones, index),
        RenderState::Tim { runs, .. } => runs
            .iter()
            .position(|run| run.contains(index))
            .map_or(DEFAULT_THEME.bar, |run| {
                if run % 2 == 0 {
                    DEFAULT_THEME.run_even
                } else {
                    DEFAULT_THEME.run_odd
                }
            }),
        RenderState::Shell {
            gap,
            key_index: Some(key),
            ..
        } if *gap > 0 && index % gap == key % gap => DEFAULT_THEME.zone_left,
        RenderState::Heap {
            heap_size,
            building: false,
        } if index >= *heap_size => DEFAULT_THEME.inactive,
        render @ RenderState::Radix { .. } => frame
            .array
            .get(index)
            .and_then(|&value| render.radix_digit(value))
            .map_or(DEFAULT_THEME.bar, |digit| DEFAULT_THEME.digits[digit]),
        _ => DEFAULT_THEME.bar,
    }
}

fn zone_color(zones: &MergeZones, index: usize) -> Color {
    if zones.merged.is_some_and(|merged| merged.contains(index)) {
        DEFAULT_THEME.zone_merged
    } else if zones.left.contains(index) {
        DEFAULT_THEME.zone_left
    } else if zones.right.contains(index) {
        DEFAULT_THEME.zone_right
    } else {
        DEFAULT_THEME.inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::outcome::StepOutcome;
    use crate::engine::sorted::SortedSet;
    use crate::snapshot::Zone;

    fn frame(render: RenderState, outcome: StepOutcome) -> Frame {
        Frame {
            step: 1,
            array: vec![5, 3, 8, 1, 9, 2],
            outcome,
            sorted: SortedSet::new(),
            render,
        }
    }

    #[test]
    fn test_heights_offset_negatives() {
        assert_eq!(bar_heights(&[3, 1, 2]), vec![4, 2, 3]);
        assert_eq!(bar_heights(&[-2, 0, 5]), vec![1, 3, 8]);
        assert_eq!(bar_heights(&[i64::MIN, i64::MAX]), vec![1, u64::MAX]);
    }

    #[test]
    fn test_geometry_fits_width() {
        assert_eq!(bar_geometry(60, 20), (2, 1));
        assert_eq!(bar_geometry(30, 20), (1, 0));
        assert_eq!(bar_geometry(500, 4), (12, 1));
    }

    #[test]
    fn test_highlight_priority() {
        let outcome = StepOutcome::new("x").primary(0).secondary(1).pivot(1);
        let mut f = frame(RenderState::Plain, outcome);
        f.sorted.insert(0);
        f.sorted.insert(2);
        assert_eq!(bar_color(&f, 0), DEFAULT_THEME.compare);
        assert_eq!(bar_color(&f, 1), DEFAULT_THEME.pivot);
        assert_eq!(bar_color(&f, 2), DEFAULT_THEME.sorted);
        assert_eq!(bar_color(&f, 3), DEFAULT_THEME.bar);
    }

    #[test]
    fn test_merge_zones() {
        let zones = MergeZones {
            left: Zone::new(0, 2),
            right: Zone::new(3, 4),
            merged: Some(Zone::new(0, 1)),
        };
        let f = frame(RenderState::Merge { zones: Some(zones) }, StepOutcome::default());
        assert_eq!(bar_color(&f, 0), DEFAULT_THEME.zone_merged);
        assert_eq!(bar_color(&f, 2), DEFAULT_THEME.zone_left);
        assert_eq!(bar_color(&f, 4), DEFAULT_THEME.zone_right);
        assert_eq!(bar_color(&f, 5), DEFAULT_THEME.inactive);
    }

    #[test]
    fn test_quick_range_dims_outside() {
        let render = RenderState::Quick {
            range: Some(Zone::new(2, 4)),
        };
        let f = frame(render, StepOutcome::default());
        assert_eq!(bar_color(&f, 1), DEFAULT_THEME.inactive);
        assert_eq!(bar_color(&f, 3), DEFAULT_THEME.bar);
    }
}
