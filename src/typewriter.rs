//! Hero name that types itself out, alternating between two languages.

use std::time::Duration;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Thai,
}

impl Language {
    pub fn other(self) -> Self {
        match self {
            Language::English => Language::Thai,
            Language::Thai => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Characters are still being appended.
    Typing,
    /// The full name is shown; waiting out the dwell time.
    Holding,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    english: &'static str,
    thai: &'static str,
    language: Language,
    /// Characters currently shown.
    shown: usize,
}

impl Typewriter {
    pub fn new(english: &'static str, thai: &'static str) -> Self {
        Self {
            english,
            thai,
            language: Language::English,
            shown: 0,
        }
    }

    pub fn full_text(&self) -> &'static str {
        match self.language {
            Language::English => self.english,
            Language::Thai => self.thai,
        }
    }

    /// The visible prefix of the active name.
    pub fn text(&self) -> &'static str {
        let full = self.full_text();
        let end = full
            .char_indices()
            .nth(self.shown)
            .map_or(full.len(), |(idx, _)| idx);
        &full[..end]
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> Phase {
        if self.shown < self.full_text().chars().count() {
            Phase::Typing
        } else {
            Phase::Holding
        }
    }

    /// Fires the pending timer: type one more character, or once the dwell
    /// is over, clear the field and switch language.
    pub fn advance(&mut self) {
        match self.phase() {
            Phase::Typing => self.shown += 1,
            Phase::Holding => {
                self.shown = 0;
                self.language = self.language.other();
            }
        }
    }

    /// How long until [`advance`](Self::advance) should run next.
    pub fn next_delay(&self, config: &SiteConfig) -> Duration {
        let ms = match self.phase() {
            Phase::Typing => config.type_tick_ms,
            Phase::Holding => config.dwell_ms,
        };
        Duration::from_millis(u64::from(ms))
    }
}
