//! Slide stage
//!
//! The stage mounts exactly one slide at a time: the one at the navigation
//! index. When the index changes the previous slide is unmounted (its timers
//! stop with it and any speech is cancelled) and a fresh instance is built
//! through the registry factory. A short cosmetic transition slides the old
//! slide out and the new one in; input is never blocked by it.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use tracing::{debug, info, warn};

use liblessondeck::{Language, LessonError, Phrase, Registry, Speaker, VocabEntry};

use crate::slides::{MountContext, Slide, SlideFactory, SlideProps, SlideResponse, SlideSettings};
use crate::ui::theme::Theme;

struct Mounted {
    index: usize,
    slide: Box<dyn Slide>,
}

/// Which way the deck moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Exit-then-enter animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    duration: Duration,
    elapsed: Duration,
    direction: Direction,
}

impl Transition {
    fn start(duration: Duration, direction: Direction) -> Option<Self> {
        (!duration.is_zero()).then_some(Self {
            duration,
            elapsed: Duration::ZERO,
            direction,
        })
    }

    fn progress(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn is_exiting(&self) -> bool {
        self.progress() < 0.5
    }
}

/// Cubic ease-out on `[0, 1]`
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// `area` shrunk by `offset` columns on the side the slide is leaving from
fn shifted(area: Rect, offset: u16, from_left: bool) -> Rect {
    let offset = offset.min(area.width);
    if from_left {
        Rect {
            x: area.x + offset,
            width: area.width - offset,
            ..area
        }
    } else {
        Rect {
            width: area.width - offset,
            ..area
        }
    }
}

pub struct Stage {
    registry: Registry<SlideFactory>,
    vocab: Vec<Arc<VocabEntry>>,
    settings: SlideSettings,
    rng: StdRng,
    speaker: Box<dyn Speaker>,
    theme: Theme,
    transition_length: Duration,
    current: Option<Mounted>,
    outgoing: Option<Mounted>,
    transition: Option<Transition>,
    /// Speech failure not yet shown to the user
    speech_error: Option<String>,
}

impl Stage {
    pub fn new(
        registry: Registry<SlideFactory>,
        vocab: Vec<Arc<VocabEntry>>,
        speaker: Box<dyn Speaker>,
    ) -> Self {
        Self {
            registry,
            vocab,
            settings: SlideSettings::default(),
            rng: StdRng::from_entropy(),
            speaker,
            theme: Theme::default(),
            transition_length: Duration::ZERO,
            current: None,
            outgoing: None,
            transition: None,
            speech_error: None,
        }
    }

    pub fn with_settings(self, settings: SlideSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn with_rng(self, rng: StdRng) -> Self {
        Self { rng, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn with_transition(self, transition_length: Duration) -> Self {
        Self {
            transition_length,
            ..self
        }
    }

    pub fn registry(&self) -> &Registry<SlideFactory> {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Index of the mounted slide
    pub fn mounted_index(&self) -> Option<usize> {
        self.current.as_ref().map(|m| m.index)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Mount the slide at `index` if it is not already on stage
    pub fn sync(&mut self, index: usize) {
        if self.mounted_index() == Some(index) {
            return;
        }

        let Some((kind, factory, data)) = self
            .registry
            .get(index)
            .map(|d| (d.kind, d.render, d.data.clone()))
        else {
            debug_assert!(false, "slide index {} out of bounds", index);
            self.unmount();
            return;
        };

        let direction = match self.mounted_index() {
            Some(previous) if previous > index => Direction::Backward,
            _ => Direction::Forward,
        };
        let had_slide = self.current.is_some();
        self.unmount();

        let mut ctx = MountContext {
            data: data.as_ref(),
            vocab: &self.vocab,
            rng: &mut self.rng,
            settings: &self.settings,
        };
        let slide = factory(&mut ctx);
        self.current = Some(Mounted { index, slide });
        self.transition = if had_slide {
            Transition::start(self.transition_length, direction)
        } else {
            None
        };
        if self.transition.is_none() {
            self.outgoing = None;
        }

        info!(index, %kind, "Slide mounted");
    }

    /// Drop the mounted slide, keeping it only as a picture for the exit
    /// animation
    fn unmount(&mut self) {
        self.speaker.cancel();
        if let Some(old) = self.current.take() {
            debug!(index = old.index, "Slide unmounted");
            self.outgoing = Some(old);
        }
    }

    fn props(&self, index: usize, lang: Language, is_active: bool) -> SlideProps<'_> {
        SlideProps {
            is_active,
            lang,
            data: self.registry.get(index).and_then(|d| d.data.as_ref()),
            theme: &self.theme,
        }
    }

    /// Route a key to the mounted slide and carry out speech requests
    pub fn handle_key(&mut self, key: KeyEvent, lang: Language) -> SlideResponse {
        let Some(index) = self.mounted_index() else {
            return SlideResponse::Ignored;
        };

        let props = SlideProps {
            is_active: true,
            lang,
            data: self.registry.get(index).and_then(|d| d.data.as_ref()),
            theme: &self.theme,
        };
        let response = match self.current.as_mut() {
            Some(mounted) => mounted.slide.handle_key(key, &props),
            None => SlideResponse::Ignored,
        };

        if let SlideResponse::Speak(request) = &response {
            if let Err(e) = self.speaker.speak(request) {
                warn!(error = %e, "Speech request failed");
                self.speech_error = Some(LessonError::from(e).to_string());
            }
        }
        response
    }

    /// Take the last speech failure, if it has not been reported yet
    pub fn take_speech_error(&mut self) -> Option<String> {
        self.speech_error.take()
    }

    /// Advance the transition and the mounted slide's timers
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(transition) = self.transition.as_mut() {
            transition.elapsed += elapsed;
            if transition.is_done() {
                self.transition = None;
                self.outgoing = None;
            }
        }
        if let Some(mounted) = self.current.as_mut() {
            mounted.slide.tick(elapsed);
        }
    }

    pub fn captures_input(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|m| m.slide.captures_input())
    }

    pub fn hint(&self) -> Option<Phrase> {
        self.current.as_ref().and_then(|m| m.slide.hint())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, lang: Language) {
        let Some(current) = &self.current else {
            return;
        };

        match (self.transition, &self.outgoing) {
            (Some(transition), Some(outgoing)) if transition.is_exiting() => {
                let phase = ease_out(transition.progress() * 2.0);
                let offset = (phase * f64::from(area.width)) as u16;
                // Forward: the old slide leaves to the left
                let rect = shifted(area, offset, transition.direction == Direction::Backward);
                let props = self.props(outgoing.index, lang, false);
                outgoing.slide.render(frame, rect, &props);
                frame
                    .buffer_mut()
                    .set_style(rect, Style::default().add_modifier(Modifier::DIM));
            }
            (Some(transition), _) => {
                let phase = ease_out((transition.progress() - 0.5).max(0.0) * 2.0);
                let offset = ((1.0 - phase) * f64::from(area.width)) as u16;
                let rect = shifted(area, offset, transition.direction == Direction::Forward);
                let props = self.props(current.index, lang, true);
                current.slide.render(frame, rect, &props);
            }
            (None, _) => {
                let props = self.props(current.index, lang, true);
                current.slide.render(frame, area, &props);
            }
        }
    }
}
