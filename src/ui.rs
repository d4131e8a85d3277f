use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use wordsprint::{engine::SessionEngine, theme::Palette};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const VISIBLE_LINES: usize = 3;

/// Packs words into lines no wider than `max_width`, one space between words.
///
/// A word wider than the line gets a line of its own.
pub fn word_lines(words: &[String], max_width: usize) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (idx, word) in words.iter().enumerate() {
        let w = word.width();
        if idx > start && width + 1 + w > max_width {
            lines.push(start..idx);
            start = idx;
            width = w;
        } else if idx == start {
            width = w;
        } else {
            width += 1 + w;
        }
    }

    if start < words.len() {
        lines.push(start..words.len());
    }
    lines
}

/// Index of the first line to draw so the word being typed stays on top
fn first_visible_line(lines: &[Range<usize>], current_index: usize) -> usize {
    lines
        .iter()
        .position(|line| line.contains(&current_index))
        .unwrap_or(lines.len().saturating_sub(1))
}

fn current_word_spans<'a>(target: &'a str, typing: &'a str, palette: &Palette) -> Vec<Span<'a>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut typed = typing.chars();
    let mut spans: Vec<Span> = target
        .chars()
        .map(|expected| match typed.next() {
            Some(c) if c == expected => {
                Span::styled(expected.to_string(), bold.fg(palette.correct))
            }
            Some(_) => Span::styled(expected.to_string(), bold.fg(palette.wrong)),
            None => Span::styled(
                expected.to_string(),
                bold.fg(palette.text).bg(palette.highlight),
            ),
        })
        .collect();

    let overflow: String = typed.collect();
    if !overflow.is_empty() {
        spans.push(Span::styled(
            overflow,
            bold.fg(palette.wrong).add_modifier(Modifier::UNDERLINED),
        ));
    }
    spans
}

fn words_text<'a>(engine: &'a SessionEngine, width: usize, palette: &Palette) -> Vec<Line<'a>> {
    let words = engine.words();
    let lines = word_lines(words, width);
    let first = first_visible_line(&lines, engine.current_index());
    let current = engine.current_index();

    lines
        .iter()
        .skip(first)
        .take(VISIBLE_LINES)
        .map(|range| {
            let mut spans = Vec::new();
            for idx in range.clone() {
                if idx > range.start {
                    spans.push(Span::raw(" "));
                }
                let word = words[idx].as_str();
                if idx < current {
                    let style = match engine.typed_words().get(idx) {
                        Some(typed) if typed.is_correct => Style::default().fg(palette.correct),
                        _ => Style::default()
                            .fg(palette.wrong)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    spans.push(Span::styled(word, style));
                } else if idx == current {
                    spans.extend(current_word_spans(
                        word,
                        engine.current_typing(),
                        palette,
                    ));
                } else {
                    spans.push(Span::styled(word, Style::default().fg(palette.pending)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn results_line(engine: &SessionEngine) -> String {
    let result = engine.result();
    format!(
        "Gross: {:.2} WPM   Net: {:.2} WPM   Accuracy: {:.0} %",
        result.gross,
        result.net,
        result.accuracy * 100.0
    )
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme().palette();
        let engine = self.test.engine();
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(palette.pending);

        Block::default()
            .style(Style::default().bg(palette.background).fg(palette.text))
            .render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(VISIBLE_LINES as u16 + 2), // words
                Constraint::Length(3),                        // input + timer
                Constraint::Length(1),                        // results
                Constraint::Min(0),
                Constraint::Length(1), // legend
            ])
            .split(area);

        let words_area = chunks[1];
        let inner_width = words_area.width.saturating_sub(2).max(1) as usize;
        let words = Paragraph::new(words_text(engine, inner_width, &palette)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(dim_style),
        );
        words.render(words_area, buf);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(12)])
            .split(chunks[2]);

        let input = Paragraph::new(Span::styled(self.test.field().value(), bold_style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
        input.render(controls[0], buf);

        let remaining = if self.test.countdown().is_running() || engine.has_finished() {
            self.test.seconds_remaining(self.now)
        } else {
            self.test.countdown().total_secs()
        };
        let timer = Paragraph::new(Span::styled(
            format!("{remaining}s"),
            bold_style.fg(palette.accent),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(dim_style));
        timer.render(controls[1], buf);

        Paragraph::new(Span::styled(results_line(engine), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(
            "(tab) autocomplete / (f5) restart / (ctrl+t) theme / (esc)ape",
            dim_style.add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

        if engine.has_finished() {
            let banner_width = 24.min(words_area.width);
            let banner = Rect {
                x: words_area.x + (words_area.width - banner_width) / 2,
                y: words_area.y + words_area.height.saturating_sub(3) / 2,
                width: banner_width,
                height: 3.min(words_area.height),
            };
            Clear.render(banner, buf);
            Paragraph::new(Span::styled("Time's up!", bold_style.fg(palette.accent)))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .style(Style::default().bg(palette.background)),
                )
                .render(banner, buf);
        }
    }
}
