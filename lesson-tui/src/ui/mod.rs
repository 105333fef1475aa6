//! UI rendering
//!
//! Pure rendering functions that draw the chrome around the stage: header
//! with the language switcher, footer with progress and key hints, and the
//! help and error overlays.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::UNIT_TITLE;
use liblessondeck::{t, Language};

use crate::app::App;
use theme::Theme;

pub mod labels;
pub mod theme;

/// Global keys listed in the help overlay
const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("→ / Space", "next slide"),
    ("←", "previous slide"),
    ("F1", "help"),
    ("F2 F3 F4", "English / Русский / O'zbek"),
    ("Esc", "close overlay"),
    ("q / Ctrl+C", "quit"),
];

/// Render the application UI
///
/// This is the main rendering entry point.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = *app.stage.theme();
    let lang = app.state.nav.language();

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(frame, header, lang, &theme);
    app.stage.render(frame, body, lang);
    render_footer(frame, footer, app, &theme);

    if app.state.help_visible {
        render_help_overlay(frame, area, app, &theme);
    }

    if let Some(ref error) = app.state.error {
        render_error_overlay(frame, area, error, lang, &theme);
    }
}

/// Unit title on the left, language switcher on the right
fn render_header(frame: &mut Frame, area: Rect, lang: Language, theme: &Theme) {
    let [title, switcher] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(14)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(UNIT_TITLE, theme.title())),
        title,
    );

    let mut spans = Vec::new();
    for language in Language::ALL {
        let label = language.code().to_uppercase();
        let style = if language == lang {
            theme.cursor().add_modifier(Modifier::BOLD)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).right_aligned(), switcher);
}

/// Progress bar, position and hints
fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let nav = &app.state.nav;
    let lang = nav.language();
    let [progress, hints] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let position = format!(" {} / {}", nav.current_index() + 1, nav.len());
    let bar_width = (progress.width as usize).saturating_sub(position.chars().count());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(theme.bar(nav.progress(), bar_width), theme.accent()),
            Span::styled(position, theme.muted()),
        ])),
        progress,
    );

    let mut spans = Vec::new();
    if let Some(hint) = app.stage.hint() {
        spans.push(Span::styled(t(lang, &hint).to_string(), theme.accent()));
        spans.push(Span::raw("  │  "));
    }
    spans.push(Span::styled(t(lang, &labels::NAV_HINT).to_string(), theme.muted()));
    frame.render_widget(Paragraph::new(Line::from(spans)), hints);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let lang = app.state.nav.language();
    let popup_area = centered_rect(60, 60, area);

    let mut help_text = vec![
        Line::from(Span::styled(
            t(lang, &labels::HELP_TITLE).to_string(),
            theme.title(),
        )),
        Line::from(""),
        Line::from(format!("{}:", t(lang, &labels::HELP_GLOBAL))),
    ];
    help_text.extend(
        GLOBAL_KEYS
            .iter()
            .map(|(keys, what)| Line::from(format!("  {:<12} {}", keys, what))),
    );

    if let Some(hint) = app.stage.hint() {
        help_text.push(Line::from(""));
        help_text.push(Line::from(format!("{}:", t(lang, &labels::HELP_SLIDE))));
        help_text.push(Line::from(format!("  {}", t(lang, &hint))));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        t(lang, &labels::HELP_CLOSE).to_string(),
        theme.muted(),
    )));

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(theme.title()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, lang: Language, theme: &Theme) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(t(lang, &labels::ERROR_TITLE).to_string(), theme.failure())),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(t(lang, &labels::ERROR_DISMISS).to_string()),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(format!(" {} ", t(lang, &labels::ERROR_TITLE)))
                .borders(Borders::ALL)
                .border_style(theme.failure()),
        )
        .wrap(Wrap { trim: false })
        .centered();

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}
