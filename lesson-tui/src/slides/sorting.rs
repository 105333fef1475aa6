//! Sorting exercises: rules of conversation and communication channels

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use liblessondeck::content::lesson::{Channel, ConversationRule, CHANNEL_ITEMS, CONVERSATION_ITEMS};
use liblessondeck::exercise::{ClassifyItem, Classifier};
use liblessondeck::{t, Phrase};

use super::{slide_block, MountContext, Slide, SlideProps, SlideResponse};
use crate::ui::labels;
use crate::ui::theme::Theme;

const CONVERSATION_TITLE: Phrase =
    Phrase::new("The Rules of Conversation", "Правила разговора", "Suhbat qoidalari");
const CONVERSATION_SUBTITLE: Phrase = Phrase::new(
    "Aim to do vs. Avoid",
    "Что делать vs. Чего избегать",
    "Qilish kerak vs. Qochish kerak",
);
const AIM_TO_DO: Phrase = Phrase::new("Aim to Do", "Делай это", "Buni qil");
const AVOID: Phrase = Phrase::new("Avoid", "Избегай", "Qoching");
const TO_SORT: Phrase = Phrase::new("To sort", "Распредели", "Saralang");

const CHANNELS_TITLE: Phrase = Phrase::new("Communication Channels", "Каналы связи", "Aloqa kanallari");

/// Cursor over a classification board
///
/// The cursor walks the items in display order whichever column they are
/// in, so every item stays reachable after it has been placed.
#[derive(Debug, Clone)]
struct SortBoard<C> {
    board: Classifier<C>,
    cursor: usize,
}

impl<C: Copy + PartialEq> SortBoard<C> {
    fn new(board: Classifier<C>) -> Self {
        Self { board, cursor: 0 }
    }

    fn selected_id(&self) -> Option<usize> {
        self.board.items().get(self.cursor).map(|item| item.id)
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.board.len();
        if len == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    fn assign_selected(&mut self, category: C) -> bool {
        match self.selected_id() {
            Some(id) => self.board.assign(id, category),
            None => false,
        }
    }

    fn unassign_selected(&mut self) -> bool {
        match self.selected_id() {
            Some(id) => self.board.unassign(id),
            None => false,
        }
    }

    fn item_line<'a>(
        &self,
        item: &'a ClassifyItem<C>,
        theme: &Theme,
        marker: &'static str,
    ) -> Line<'a> {
        let is_cursor = self.selected_id() == Some(item.id);
        let style = if is_cursor {
            theme.cursor()
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(item.text.as_str(), style)];
        if !marker.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(marker, theme.failure()));
        }
        Line::from(spans)
    }

    fn render_column(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        items: Vec<&ClassifyItem<C>>,
        theme: &Theme,
        marker_for: impl Fn(&ClassifyItem<C>) -> &'static str,
    ) {
        let lines: Vec<Line> = items
            .into_iter()
            .map(|item| self.item_line(item, theme, marker_for(item)))
            .collect();

        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), theme.accent()))
            .borders(Borders::ALL)
            .border_style(theme.muted());
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

/// "Rules of Conversation": sort behaviours into Aim to do and Avoid
#[derive(Debug, Clone)]
pub struct ConversationSort {
    sort: SortBoard<ConversationRule>,
}

impl ConversationSort {
    pub fn new(board: Classifier<ConversationRule>) -> Self {
        Self {
            sort: SortBoard::new(board),
        }
    }

    pub fn mount(ctx: &mut MountContext<'_>) -> Self {
        let board = Classifier::new(CONVERSATION_ITEMS.iter().copied());
        let board = if ctx.settings.shuffle_exercises {
            board.shuffled(ctx.rng)
        } else {
            board
        };
        Self::new(board)
    }

    pub fn board(&self) -> &Classifier<ConversationRule> {
        &self.sort.board
    }
}

impl Slide for ConversationSort {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let lang = props.lang;
        let block = slide_block(t(lang, &CONVERSATION_TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [subtitle, columns, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(t(lang, &CONVERSATION_SUBTITLE), theme.muted())),
            subtitle,
        );

        let [aim, pool, avoid] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(columns);
        let board = &self.sort.board;
        let checked = board.is_checked();
        let marker = |item: &ClassifyItem<ConversationRule>| {
            if checked && !item.is_correct() {
                theme.cross_mark()
            } else {
                ""
            }
        };

        self.sort.render_column(
            frame,
            aim,
            t(lang, &AIM_TO_DO),
            board.in_category(ConversationRule::AimToDo).collect(),
            theme,
            marker,
        );
        self.sort.render_column(
            frame,
            pool,
            t(lang, &TO_SORT),
            board.unassigned().collect(),
            theme,
            |_| "",
        );
        self.sort.render_column(
            frame,
            avoid,
            t(lang, &AVOID),
            board.in_category(ConversationRule::Avoid).collect(),
            theme,
            marker,
        );

        let status_line = if checked {
            Line::from(Span::styled(
                format!("{}: {}/{}", t(lang, &labels::SCORE), board.score(), board.len()),
                theme.success(),
            ))
        } else if board.is_complete() {
            Line::from(Span::styled(
                format!("c: {}", t(lang, &labels::CHECK)),
                theme.accent(),
            ))
        } else {
            Line::from(Span::styled(
                format!("r: {}", t(lang, &labels::REVEAL_ALL)),
                theme.muted(),
            ))
        };
        frame.render_widget(Paragraph::new(status_line), status);
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        let board = &mut self.sort;
        match key.code {
            KeyCode::Up => board.move_cursor(false),
            KeyCode::Down => board.move_cursor(true),
            KeyCode::Char('a') => {
                board.assign_selected(ConversationRule::AimToDo);
            }
            KeyCode::Char('v') => {
                board.assign_selected(ConversationRule::Avoid);
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                board.unassign_selected();
            }
            KeyCode::Char('c') if board.board.is_complete() && !board.board.is_checked() => {
                let score = board.board.check();
                tracing::debug!(score, total = board.board.len(), "Conversation sort checked");
            }
            KeyCode::Char('r') if !board.board.is_complete() => board.board.reveal_all(),
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_CONVERSATION)
    }
}

/// "Communication Channels": paper, electronic, or both
///
/// A misplaced item is flagged as soon as it lands in a column.
#[derive(Debug, Clone)]
pub struct CommTypes {
    sort: SortBoard<Channel>,
}

impl Default for CommTypes {
    fn default() -> Self {
        Self {
            sort: SortBoard::new(Classifier::new(CHANNEL_ITEMS.iter().copied())),
        }
    }
}

impl CommTypes {
    pub fn mount(_ctx: &mut MountContext<'_>) -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Classifier<Channel> {
        &self.sort.board
    }
}

impl Slide for CommTypes {
    fn render(&self, frame: &mut Frame, area: Rect, props: &SlideProps) {
        let theme = props.theme;
        let lang = props.lang;
        let block = slide_block(t(lang, &CHANNELS_TITLE), theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [columns, pool] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(inner);
        let column_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(columns);
        let board = &self.sort.board;

        for (channel, area) in Channel::ALL.iter().zip(column_areas.iter()) {
            self.sort.render_column(
                frame,
                *area,
                channel.label(),
                board.in_category(*channel).collect(),
                theme,
                |item| {
                    if item.is_correct() {
                        ""
                    } else {
                        theme.warning_mark()
                    }
                },
            );
        }

        let title = if board.is_complete() {
            String::new()
        } else {
            format!("r: {}", t(lang, &labels::REVEAL_ALL))
        };
        self.sort
            .render_column(frame, pool, &title, board.unassigned().collect(), theme, |_| "");
    }

    fn handle_key(&mut self, key: KeyEvent, _props: &SlideProps) -> SlideResponse {
        let board = &mut self.sort;
        match key.code {
            KeyCode::Up => board.move_cursor(false),
            KeyCode::Down => board.move_cursor(true),
            KeyCode::Char('p') => {
                board.assign_selected(Channel::Paper);
            }
            KeyCode::Char('e') => {
                board.assign_selected(Channel::Electronic);
            }
            KeyCode::Char('b') => {
                board.assign_selected(Channel::Both);
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                board.unassign_selected();
            }
            KeyCode::Char('r') if !board.board.is_complete() => board.board.reveal_all(),
            _ => return SlideResponse::Ignored,
        }
        SlideResponse::Handled
    }

    fn hint(&self) -> Option<Phrase> {
        Some(labels::HINT_CHANNELS)
    }
}
