//! Step log pane rendering

use crate::snapshot::FrameStore;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the step log up to and including the shown frame
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    frames: &FrameStore,
    position: usize,
    scroll_offset: &mut usize,
) {
    let border_style = Style::default().fg(DEFAULT_THEME.border_normal);

    let block = Block::default()
        .title(" Step Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if frames.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = frames
        .iter()
        .take(position + 1)
        .map(|f| {
            let style = if f.step == position {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(format!("{:>4}  {}", f.step, f.outcome.message)).style(style)
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
