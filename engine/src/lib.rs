//! Application state machine for hexcast.
//!
//! # Architecture
//!
//! [`App`] owns everything the presentation layer needs: the validated
//! catalog, the cast lifecycle, modal state, the status line, and the
//! narration task channel. The TUI reads it each frame and never mutates
//! state except through the methods here.
//!
//! The cast itself is computed in one shot by `hexcast-core`; the engine
//! only paces its presentation (one line revealed per interval) and kicks
//! off the narration request once the final line is visible. No cast state
//! survives between invocations.

mod narration;

pub use narration::{NarrationEvent, NarrationState};

pub use hexcast_core::TRIALS_PER_CAST;

use tokio::sync::mpsc;

use hexcast_config::HexcastConfig;
use hexcast_core::{Catalog, CatalogError, ThreadCoins, cast};
use hexcast_providers::NarrationClient;
use hexcast_types::ui::UiOptions;
use hexcast_types::{CastId, Hexagram, Line, Trigram};

const NARRATION_CHANNEL_CAPACITY: usize = 8;

/// Frame ticks between successive line reveals (~200ms at the 8ms frame cadence).
const REVEAL_INTERVAL_TICKS: u64 = 25;

/// Frame ticks a status message stays visible (~3s).
const STATUS_TTL_TICKS: u64 = 375;

/// Lifecycle of the current cast.
#[derive(Debug, Clone, Copy)]
enum CastPhase {
    Idle,
    /// Cast is fully resolved internally; lines are revealed one at a time.
    Revealing {
        hexagram: Hexagram,
        revealed: usize,
        next_reveal: u64,
    },
    Resolved {
        hexagram: Hexagram,
    },
}

/// Which overlay is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    None,
    /// Detail view for one trigram (index into catalog display order).
    TrigramDetail { index: usize },
    /// Detail view for the resolved hexagram, including narration.
    HexagramDetail,
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    expires_at: u64,
}

pub struct App {
    catalog: &'static Catalog,
    ui_options: UiOptions,
    narration_client: Option<NarrationClient>,
    narration_tx: mpsc::Sender<NarrationEvent>,
    narration_rx: mpsc::Receiver<NarrationEvent>,
    narration: NarrationState,
    phase: CastPhase,
    modal: Modal,
    modal_scroll: u16,
    status: Option<StatusMessage>,
    tick_count: u64,
    cast_id: CastId,
}

impl App {
    /// Build the application state.
    ///
    /// Validates the built-in catalog and fails fast on a defective content
    /// table; no cast is ever attempted against an unvalidated catalog.
    pub fn new(config: Option<HexcastConfig>) -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin()?;
        let config = config.unwrap_or_default();
        let ui_options = config.ui_options();
        let narration_client = config.narration_config().map(NarrationClient::new);
        let narration = if narration_client.is_some() {
            NarrationState::Idle
        } else {
            tracing::warn!("Narration API key not configured; narration disabled");
            NarrationState::Disabled
        };

        let (narration_tx, narration_rx) = mpsc::channel(NARRATION_CHANNEL_CAPACITY);

        Ok(Self {
            catalog,
            ui_options,
            narration_client,
            narration_tx,
            narration_rx,
            narration,
            phase: CastPhase::Idle,
            modal: Modal::None,
            modal_scroll: 0,
            status: None,
            tick_count: 0,
            cast_id: CastId::new(0),
        })
    }

    // ------------------------------------------------------------------
    // Frame advancement
    // ------------------------------------------------------------------

    /// Advance one frame: progress the line reveal and expire the status line.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        if let Some(status) = &self.status
            && self.tick_count >= status.expires_at
        {
            self.status = None;
        }

        if let CastPhase::Revealing {
            hexagram,
            revealed,
            next_reveal,
        } = &mut self.phase
            && self.tick_count >= *next_reveal
        {
            *revealed += 1;
            *next_reveal += REVEAL_INTERVAL_TICKS;
            if *revealed >= TRIALS_PER_CAST {
                let hexagram = *hexagram;
                self.resolve(hexagram);
            }
        }
    }

    /// Drain narration task results.
    pub fn process_narration_events(&mut self) {
        while let Ok(event) = self.narration_rx.try_recv() {
            self.handle_narration_event(event);
        }
    }

    fn handle_narration_event(&mut self, event: NarrationEvent) {
        if event.cast_id != self.cast_id {
            tracing::debug!(
                stale = %event.cast_id,
                current = %self.cast_id,
                "Discarding narration for a superseded cast"
            );
            return;
        }
        self.narration = match event.result {
            Ok(text) => NarrationState::Ready(text),
            Err(message) => {
                tracing::warn!(%message, "Narration request failed");
                NarrationState::Failed(message)
            }
        };
    }

    // ------------------------------------------------------------------
    // Casting
    // ------------------------------------------------------------------

    /// Start a new cast. Ignored while a reveal is still in progress.
    pub fn toss(&mut self) {
        if matches!(self.phase, CastPhase::Revealing { .. }) {
            return;
        }

        self.cast_id = CastId::new(self.cast_id.value() + 1);
        self.narration = if self.narration_client.is_some() {
            NarrationState::Idle
        } else {
            NarrationState::Disabled
        };

        match cast(self.catalog, &mut ThreadCoins::new()) {
            Ok(hexagram) => {
                tracing::info!(
                    cast = %self.cast_id,
                    lower = %hexagram.lower.id,
                    upper = %hexagram.upper.id,
                    "Hexagram cast"
                );
                if self.ui_options.reduced_motion {
                    self.resolve(hexagram);
                } else {
                    // The first line is visible immediately, matching the
                    // one-line-per-interval cadence from toss onward.
                    self.phase = CastPhase::Revealing {
                        hexagram,
                        revealed: 1,
                        next_reveal: self.tick_count + REVEAL_INTERVAL_TICKS,
                    };
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Cast failed");
                self.phase = CastPhase::Idle;
                self.set_status(format!("Error al lanzar las monedas: {e}"));
            }
        }
    }

    fn resolve(&mut self, hexagram: Hexagram) {
        self.spawn_narration(&hexagram);
        self.phase = CastPhase::Resolved { hexagram };
    }

    fn spawn_narration(&mut self, hexagram: &Hexagram) {
        let Some(client) = &self.narration_client else {
            self.narration = NarrationState::Disabled;
            return;
        };

        let client = client.clone();
        let tx = self.narration_tx.clone();
        let cast_id = self.cast_id;
        let lower = hexagram.lower;
        let upper = hexagram.upper;

        self.narration = NarrationState::Loading;
        tokio::spawn(async move {
            let result = client
                .narrate(&lower, &upper)
                .await
                .map_err(|e| e.to_string());
            if tx.send(NarrationEvent { cast_id, result }).await.is_err() {
                tracing::debug!("Narration receiver dropped before completion");
            }
        });
    }

    // ------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------

    pub fn open_trigram_modal(&mut self, index: usize) {
        if index < self.catalog.entries().len() {
            self.modal = Modal::TrigramDetail { index };
            self.modal_scroll = 0;
        }
    }

    /// Open the hexagram detail modal. Only valid once a cast has resolved.
    pub fn open_hexagram_modal(&mut self) {
        if matches!(self.phase, CastPhase::Resolved { .. }) {
            self.modal = Modal::HexagramDetail;
            self.modal_scroll = 0;
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
        self.modal_scroll = 0;
    }

    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    #[must_use]
    pub fn modal_scroll(&self) -> u16 {
        self.modal_scroll
    }

    pub fn scroll_modal(&mut self, delta: i16) {
        self.modal_scroll = self.modal_scroll.saturating_add_signed(delta);
    }

    /// The trigram shown in the open detail modal, if any.
    #[must_use]
    pub fn selected_trigram(&self) -> Option<&Trigram> {
        match self.modal {
            Modal::TrigramDetail { index } => self.catalog.entries().get(index),
            _ => None,
        }
    }

    /// Clipboard payload for the open trigram modal: both SuperCollider
    /// sketches, ready to paste into an interpreter.
    #[must_use]
    pub fn supercollider_snippet(&self) -> Option<String> {
        let trigram = self.selected_trigram()?;
        Some(format!(
            "// {} ({}) - {}\n// {}\n\n{}\n\n{}\n",
            trigram.name,
            trigram.chinese_name,
            trigram.symbol,
            trigram.ideas.concept,
            trigram.ideas.synth_example,
            trigram.ideas.pattern_example,
        ))
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True while lines are still being revealed.
    #[must_use]
    pub fn is_tossing(&self) -> bool {
        matches!(self.phase, CastPhase::Revealing { .. })
    }

    /// Lines visible so far, in bottom-to-top order.
    #[must_use]
    pub fn revealed_lines(&self) -> &[Line] {
        match &self.phase {
            CastPhase::Idle => &[],
            CastPhase::Revealing {
                hexagram, revealed, ..
            } => &hexagram.lines[..*revealed],
            CastPhase::Resolved { hexagram } => &hexagram.lines,
        }
    }

    /// The resolved hexagram, once the reveal has finished.
    #[must_use]
    pub fn hexagram(&self) -> Option<&Hexagram> {
        match &self.phase {
            CastPhase::Resolved { hexagram } => Some(hexagram),
            _ => None,
        }
    }

    #[must_use]
    pub fn narration(&self) -> &NarrationState {
        &self.narration
    }

    #[must_use]
    pub fn narration_enabled(&self) -> bool {
        self.narration_client.is_some()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: self.tick_count + STATUS_TTL_TICKS,
        });
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}
