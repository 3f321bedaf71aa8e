use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::{OptionMark, QuizView, ResultView, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

/// Braille spinner frames for the loading indicator.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Lines for the result pane. `animation_tick` drives the spinner.
pub fn result_lines(view: &ResultView<'_>, animation_tick: u64) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

    match view {
        ResultView::Loading { action } => {
            let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled(format!("Generating {}...", action), text_style),
                ]),
            ]
        }
        ResultView::Error { message } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(STATUS_ERROR),
            )),
        ],
        ResultView::Placeholder => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", PLACEHOLDER_TITLE), text_style)),
            Line::from(Span::styled(
                format!("  {}", PLACEHOLDER_HINT),
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        ResultView::Summary { text } => {
            let mut lines = vec![
                Line::from(Span::styled("Document Summary", title_style)),
                Line::from(""),
            ];
            lines.extend(
                text.lines()
                    .map(|line| Line::from(Span::styled(line.to_string(), text_style))),
            );
            lines
        }
        ResultView::StudyPlan { weeks } => {
            let mut lines = vec![Line::from(Span::styled("Your 4-Week Study Plan", title_style))];
            for week in weeks {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("Week {}: ", week.week),
                        Style::default().fg(ACCENT),
                    ),
                    Span::styled(
                        week.title.clone(),
                        text_style.add_modifier(Modifier::BOLD),
                    ),
                ]));
                for goal in &week.goals {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(MUTED_TEXT)),
                        Span::styled(goal.clone(), text_style),
                    ]));
                }
            }
            lines
        }
        ResultView::Quiz(quiz) => quiz_lines(quiz),
    }
}

fn quiz_lines(quiz: &QuizView) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Quiz Time!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Score: {} / {}", quiz.score, quiz.total),
            text_style,
        ),
    ])];

    for question in &quiz.questions {
        lines.push(Line::from(""));
        let pointer = if question.focused && !quiz.finished { "▸ " } else { "  " };
        let mut heading = Line::from(vec![
            Span::styled(pointer, Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}. {}", question.number, question.text),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ]);
        if question.focused && !question.answered {
            heading = heading.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(heading);

        for option in &question.options {
            let (marker, style) = match option.mark {
                OptionMark::Selectable => ("   ", text_style),
                OptionMark::Correct => (" ✓ ", Style::default().fg(STATUS_OK)),
                OptionMark::Incorrect => (" ✗ ", Style::default().fg(STATUS_ERROR)),
                OptionMark::Inert => ("   ", Style::default().fg(MUTED_TEXT)),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", marker), style),
                Span::styled(format!("{}) {}", option.key, option.text), style),
            ]));
        }
    }

    if quiz.finished {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "  [ Try Again ]",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  press r", Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines
}
