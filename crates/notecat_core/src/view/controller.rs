//! View controller and event dispatch.
//!
//! # Responsibility
//! - Own FilterState, SelectionSet, ViewMode and the catalog store.
//! - Route typed events to the pure operations and push projections to the
//!   rendering surface.
//!
//! # Invariants
//! - ViewMode transitions exist only as specified: List stays List on
//!   filter changes, List enters Comparison on a valid compare request,
//!   Comparison returns to List on request. Everything else is a logged
//!   no-op.
//! - Validation failures never mutate state or change the view mode.
//! - Filter state survives the comparison excursion unchanged.

use crate::catalog::{CatalogStore, LoadError};
use crate::model::notebook::NotebookRecord;
use crate::service::filter::{filter_by_profile, ProfileFilter};
use crate::service::selection::{resolve_selection, SelectionSet, ValidationError};
use crate::view::table::{build_table, TableModel};
use log::{error, info, warn};

/// Which of the two surfaces is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Comparison,
}

/// Typed user/system events, delivered one at a time.
#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of the single startup catalog fetch.
    LoadCompleted(Result<Vec<NotebookRecord>, LoadError>),
    /// Profile selector emission (a tag or the all-sentinel).
    ProfileChanged(String),
    /// Picker slot emission; `None` is the empty choice.
    SlotChanged(usize, Option<String>),
    CompareRequested,
    ReturnRequested,
}

/// List projection of one record: pure data for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookCard {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub storage: Option<String>,
    pub display: Option<String>,
    pub graphics: Option<String>,
    pub operating_system: Option<String>,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub profiles: Vec<String>,
}

impl From<&NotebookRecord> for NotebookCard {
    fn from(nb: &NotebookRecord) -> Self {
        Self {
            name: nb.name.clone(),
            description: nb.description.clone(),
            image: nb.image.clone(),
            processor: nb.processor.clone(),
            memory: nb.memory.clone(),
            storage: nb.storage.clone(),
            display: nb.display.clone(),
            graphics: nb.graphics.clone(),
            operating_system: nb.operating_system.clone(),
            positives: nb.positives.clone().unwrap_or_default(),
            negatives: nb.negatives.clone().unwrap_or_default(),
            profiles: nb.profiles.clone(),
        }
    }
}

/// Minimal rendering surface contract.
///
/// Implementations own the substrate (terminal, DOM, test recorder); core
/// only hands them pure projections and notices.
pub trait Renderer {
    /// Shows the list surface with the given cards.
    fn show_list(&mut self, cards: &[NotebookCard]);
    /// Shows the explicit no-results indication for an empty filter result.
    fn show_no_results(&mut self);
    /// Publishes the picker candidate list (always the full catalog).
    fn show_picker_options(&mut self, names: &[String]);
    /// Shows the comparison surface for the given table.
    fn show_comparison(&mut self, table: &TableModel);
    /// Restores the list surface and its controls after a comparison.
    fn show_list_surface(&mut self);
    /// Presents a blocking validation notice; no state has changed.
    fn show_notice(&mut self, error: &ValidationError);
}

/// Owner of all session state; see module invariants for the transitions.
pub struct ViewController<R: Renderer> {
    store: CatalogStore,
    filter: ProfileFilter,
    selection: SelectionSet,
    mode: ViewMode,
    renderer: R,
}

impl<R: Renderer> ViewController<R> {
    /// Creates a controller in List mode over the empty catalog.
    pub fn new(renderer: R) -> Self {
        Self {
            store: CatalogStore::new(),
            filter: ProfileFilter::All,
            selection: SelectionSet::new(),
            mode: ViewMode::List,
            renderer,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn filter(&self) -> &ProfileFilter {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// The owned rendering surface; test harnesses inspect recorded calls
    /// through this.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Routes one event. Events are delivered one at a time; nothing here
    /// blocks or suspends.
    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadCompleted(result) => self.on_load_completed(result),
            AppEvent::ProfileChanged(tag) => self.on_profile_changed(tag),
            AppEvent::SlotChanged(index, identifier) => self.on_slot_changed(index, identifier),
            AppEvent::CompareRequested => self.on_compare_requested(),
            AppEvent::ReturnRequested => self.on_return_requested(),
        }
    }

    fn on_load_completed(&mut self, result: Result<Vec<NotebookRecord>, LoadError>) {
        match result {
            Ok(records) => {
                self.store.install(records);
                self.renderer.show_picker_options(&self.store.names());
                self.render_list();
            }
            Err(err) => {
                // Non-fatal: the catalog stays empty and the session stays
                // interactive. No user notice, no retry.
                error!(
                    "event=load_completed module=view status=error error={}",
                    err
                );
            }
        }
    }

    fn on_profile_changed(&mut self, tag: String) {
        if self.mode == ViewMode::Comparison {
            warn!(
                "event=profile_changed module=view status=ignored mode=comparison tag={}",
                tag
            );
            return;
        }
        self.filter = ProfileFilter::from_tag(&tag);
        info!(
            "event=profile_changed module=view status=ok tag={}",
            self.filter.as_tag()
        );
        self.render_list();
    }

    fn on_slot_changed(&mut self, index: usize, identifier: Option<String>) {
        if self.mode == ViewMode::Comparison {
            warn!(
                "event=slot_changed module=view status=ignored mode=comparison slot={}",
                index
            );
            return;
        }
        if !self.selection.set_slot(index, identifier) {
            warn!(
                "event=slot_changed module=view status=rejected slot={} reason=out_of_range",
                index
            );
        }
    }

    fn on_compare_requested(&mut self) {
        if self.mode == ViewMode::Comparison {
            // Comparison controls are hidden in this mode; an event here
            // means a surface bug, not a legal transition.
            warn!("event=compare_requested module=view status=ignored mode=comparison");
            return;
        }
        match resolve_selection(&self.store, &self.selection) {
            Ok(records) => {
                let table = build_table(&records);
                info!(
                    "event=compare_requested module=view status=ok columns={}",
                    table.headers.len()
                );
                self.renderer.show_comparison(&table);
                self.mode = ViewMode::Comparison;
            }
            Err(err) => {
                info!(
                    "event=compare_requested module=view status=rejected error={}",
                    err
                );
                self.renderer.show_notice(&err);
            }
        }
    }

    fn on_return_requested(&mut self) {
        if self.mode == ViewMode::List {
            warn!("event=return_requested module=view status=ignored mode=list");
            return;
        }
        self.mode = ViewMode::List;
        self.renderer.show_list_surface();
        // Re-apply the filter retained across the excursion.
        self.render_list();
    }

    fn render_list(&mut self) {
        let visible = filter_by_profile(self.store.records(), &self.filter);
        if visible.is_empty() {
            self.renderer.show_no_results();
            return;
        }
        let cards: Vec<NotebookCard> = visible.into_iter().map(NotebookCard::from).collect();
        self.renderer.show_list(&cards);
    }
}
