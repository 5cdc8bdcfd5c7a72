//! Algorithm legend: name, description, live algorithm fields and colors

use crate::engine::algorithm::Algorithm;
use crate::snapshot::{RenderState, Zone};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the legend pane
pub fn render_legend_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    render: Option<&RenderState>,
) {
    let border_style = Style::default().fg(DEFAULT_THEME.border_normal);

    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let stability = if algorithm.is_stable() { "stable" } else { "unstable" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                algorithm.name(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({stability})"),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(Span::styled(
            algorithm.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
    ];

    if let Some(render) = render {
        lines.extend(
            details(render)
                .into_iter()
                .map(|text| Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.secondary)))),
        );
        lines.push(Line::default());
    }

    lines.extend(color_key(algorithm));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Human-readable lines describing the algorithm-specific state
pub fn details(render: &RenderState) -> Vec<String> {
    match render {
        RenderState::Plain => Vec::new(),
        RenderState::Quick { range } => vec![match range {
            Some(range) => format!("Partitioning {}", zone(range)),
            None => "No active partition".to_string(),
        }],
        RenderState::Merge { zones } => match zones {
            Some(zones) => vec![format!(
                "Merging {} with {}",
                zone(&zones.left),
                zone(&zones.right)
            )],
            None => vec!["Splitting".to_string()],
        },
        RenderState::Heap {
            heap_size,
            building,
        } => vec![
            format!("Heap size: {heap_size}"),
            if *building {
                "Phase: building max-heap".to_string()
            } else {
                "Phase: extracting maximum".to_string()
            },
        ],
        RenderState::Shell { gap, .. } => vec![format!("Gap: {gap}")],
        RenderState::Tim {
            runs,
            merging,
            zones,
        } => {
            let mut lines = vec![format!(
                "Runs: {} ({})",
                runs.len(),
                if *merging { "merging" } else { "insertion sorting" }
            )];
            if let Some(zones) = zones {
                lines.push(format!(
                    "Merging {} with {}",
                    zone(&zones.left),
                    zone(&zones.right)
                ));
            }
            lines
        }
        RenderState::Radix {
            phase,
            place,
            counts,
            ..
        } => {
            let buckets: Vec<String> = counts
                .iter()
                .enumerate()
                .map(|(digit, count)| format!("{digit}:{count}"))
                .collect();
            vec![
                format!("Phase: {phase}, digit place {place}"),
                format!("Buckets {}", buckets.join(" ")),
            ]
        }
    }
}

fn zone(zone: &Zone) -> String {
    format!("[{}..{}]", zone.start, zone.end)
}

fn color_key(algorithm: Algorithm) -> Vec<Line<'static>> {
    let mut entries: Vec<(Color, &str)> = vec![
        (DEFAULT_THEME.compare, "comparing / key"),
        (DEFAULT_THEME.swap, "second index"),
        (DEFAULT_THEME.sorted, "sorted"),
    ];
    match algorithm {
        Algorithm::Quick => {
            entries.push((DEFAULT_THEME.pivot, "pivot"));
            entries.push((DEFAULT_THEME.inactive, "outside partition"));
        }
        Algorithm::Merge | Algorithm::Tim => {
            entries.push((DEFAULT_THEME.zone_left, "left half"));
            entries.push((DEFAULT_THEME.zone_right, "right half"));
            entries.push((DEFAULT_THEME.zone_merged, "merged"));
        }
        Algorithm::Shell => entries.push((DEFAULT_THEME.zone_left, "current gap chain")),
        Algorithm::Heap => entries.push((DEFAULT_THEME.inactive, "outside heap")),
        _ => {}
    }

    entries
        .into_iter()
        .map(|(color, label)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(label.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect()
}
