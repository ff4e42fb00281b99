// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The segmented book list.
//!
//! Shows the books of either the [`Segment::ToRead`] or the
//! [`Segment::Finished`] segment, optionally restricted by the text of
//! the search overlay. The results are grouped into sections by
//! read state.

use std::collections::HashMap;

use discro::Subscriber;
use readlist_core::{BookUid, ReadState, Segment};
use readlist_core_api::book::search::Params;
use readlist_repo::book::{IndexPath, Sections};
use strum::IntoEnumIterator as _;
use thiserror::Error;

use crate::{Handle, Observable, ObservableRef, book};

pub mod tasklet;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const TOP: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOverlay {
    active: bool,
    text: String,
}

impl SearchOverlay {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text that restricts the results, if any.
    #[must_use]
    pub fn filter_text(&self) -> Option<&str> {
        (self.active && !self.text.is_empty()).then_some(self.text.as_str())
    }
}

/// Explains why no books are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoSearchResults,
    SegmentEmpty(Segment),
}

impl EmptyState {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NoSearchResults => "No results",
            Self::SegmentEmpty(Segment::ToRead) => "You are not reading any books!",
            Self::SegmentEmpty(Segment::Finished) => "You haven't yet finished a book. Get going!",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NoSearchResults => "Try changing your search.",
            Self::SegmentEmpty(_) => "Add a book by clicking the + button above.",
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Initial,
    Ready {
        params: Params,
        sections: Sections,
    },
    Failed {
        params: Params,
        err_msg: String,
    },
}

impl FetchState {
    #[must_use]
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    #[must_use]
    pub fn params(&self) -> Option<&Params> {
        match self {
            Self::Initial => None,
            Self::Ready { params, .. } | Self::Failed { params, .. } => Some(params),
        }
    }

    #[must_use]
    pub fn sections(&self) -> Option<&Sections> {
        match self {
            Self::Ready { sections, .. } => Some(sections),
            Self::Initial | Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn err_msg(&self) -> Option<&str> {
        match self {
            Self::Failed { err_msg, .. } => Some(err_msg),
            Self::Initial | Self::Ready { .. } => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct State {
    segment: Segment,
    // Initialized lazily when the list appears for the first time.
    scroll_positions: Option<HashMap<Segment, ScrollPosition>>,
    search: SearchOverlay,
    fetch: FetchState,
    selected: Option<BookUid>,
    fetch_count: usize,
}

impl State {
    #[must_use]
    pub fn new(segment: Segment) -> Self {
        Self {
            segment,
            scroll_positions: None,
            search: Default::default(),
            fetch: Default::default(),
            selected: None,
            fetch_count: 0,
        }
    }

    #[must_use]
    pub const fn segment(&self) -> Segment {
        self.segment
    }

    #[must_use]
    pub const fn search(&self) -> &SearchOverlay {
        &self.search
    }

    #[must_use]
    pub const fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    #[must_use]
    pub fn sections(&self) -> Option<&Sections> {
        self.fetch.sections()
    }

    /// The book that is currently shown in detail.
    #[must_use]
    pub const fn selected(&self) -> Option<&BookUid> {
        self.selected.as_ref()
    }

    /// The number of results that have been received.
    #[must_use]
    pub const fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    #[must_use]
    pub fn scroll_position(&self, segment: Segment) -> Option<ScrollPosition> {
        self.scroll_positions
            .as_ref()
            .and_then(|positions| positions.get(&segment).copied())
    }

    /// The query for the current segment and search text.
    #[must_use]
    pub fn params(&self) -> Params {
        Params::segment(self.segment, self.search.filter_text())
    }

    #[must_use]
    pub fn index_path_of(&self, uid: &BookUid) -> Option<IndexPath> {
        self.sections()?.index_path_of(uid)
    }

    #[must_use]
    pub fn selected_index_path(&self) -> Option<IndexPath> {
        self.index_path_of(self.selected.as_ref()?)
    }

    #[must_use]
    pub fn section_title(&self, index: usize) -> Option<&'static str> {
        if !self.segment.has_section_titles() {
            return None;
        }
        self.sections()?
            .section(index)
            .map(|section| section.read_state().description())
    }

    /// Only available if the current results are empty.
    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.sections()?.is_empty() {
            return None;
        }
        let empty_state = if self.search.filter_text().is_some() {
            EmptyState::NoSearchResults
        } else {
            EmptyState::SegmentEmpty(self.segment)
        };
        Some(empty_state)
    }

    /// The read state for books that are added while this segment is shown.
    #[must_use]
    pub const fn new_book_read_state(&self) -> ReadState {
        self.segment.default_read_state()
    }

    pub fn init_scroll_positions(&mut self, position: ScrollPosition) -> bool {
        if self.scroll_positions.is_some() {
            return false;
        }
        let positions = Segment::iter().map(|segment| (segment, position));
        self.scroll_positions = Some(positions.collect());
        log::debug!("Scroll positions initialized: {position:?}");
        true
    }

    /// Switch to another segment.
    ///
    /// The current position is remembered for the outgoing segment.
    pub fn switch_segment(&mut self, segment: Segment, current_position: ScrollPosition) -> bool {
        if segment == self.segment {
            log::debug!("Segment unchanged: {segment:?}");
            return false;
        }
        self.scroll_positions
            .get_or_insert_with(HashMap::new)
            .insert(self.segment, current_position);
        log::debug!(
            "Switching segment: {from:?} -> {segment:?}",
            from = self.segment
        );
        self.segment = segment;
        true
    }

    pub fn update_search(&mut self, update: impl FnOnce(&mut SearchOverlay)) -> bool {
        let before = self.search.clone();
        update(&mut self.search);
        if self.search == before {
            return false;
        }
        log::debug!("Search updated: {search:?}", search = self.search);
        true
    }

    pub fn select(&mut self, uid: BookUid) -> bool {
        if self.selected == Some(uid) {
            return false;
        }
        self.selected = Some(uid);
        true
    }

    /// Clear the selection if it refers to the given book.
    pub fn deselect(&mut self, uid: &BookUid) -> bool {
        if self.selected.as_ref() != Some(uid) {
            return false;
        }
        self.selected = None;
        true
    }

    /// Apply received results.
    ///
    /// Results for outdated parameters are discarded.
    pub fn fetch_succeeded(&mut self, params: Params, sections: Sections) -> bool {
        if params != self.params() {
            log::warn!(
                "Discarding {count} outdated result(s)",
                count = sections.total_count()
            );
            return false;
        }
        log::debug!(
            "Fetching succeeded: {count} result(s) in {sections} section(s)",
            count = sections.total_count(),
            sections = sections.sections().len()
        );
        self.fetch = FetchState::Ready { params, sections };
        self.fetch_count = self.fetch_count.wrapping_add(1);
        true
    }

    pub fn fetch_failed(&mut self, params: Params, err: &anyhow::Error) -> bool {
        if params != self.params() {
            log::warn!("Discarding outdated error: {err}");
            return false;
        }
        self.fetch = FetchState::Failed {
            params,
            err_msg: err.to_string(),
        };
        self.fetch_count = self.fetch_count.wrapping_add(1);
        true
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Segment::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// New query results have been received.
    ///
    /// Other modifications of the observable state are either announced
    /// by a dedicated event or only noticed by subscribers.
    StateChanged,
    /// Any transient presentation on top of the list should be closed.
    DismissOverlay,
    ScrollTo(ScrollPosition),
    /// Select the row without scrolling.
    SelectRow(IndexPath),
    /// Select the row and scroll it into view.
    RevealRow(IndexPath),
    ShowDetails(BookUid),
    ClearDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no receiver for event")]
pub struct NoReceiverForEvent;

/// Event emitter.
///
/// No locks must be held when calling `emit_event()`!
pub trait EventEmitter {
    fn emit_event(&self, event: Event) -> Result<(), NoReceiverForEvent>;
}

impl EventEmitter for std::sync::mpsc::Sender<Event> {
    fn emit_event(&self, event: Event) -> Result<(), NoReceiverForEvent> {
        self.send(event).map_err(|_| NoReceiverForEvent)
    }
}

/// Coordinates the segmented book list.
#[allow(missing_debug_implementations)]
pub struct Shelf<E> {
    handle: Handle,
    state: Observable<State>,
    event_emitter: E,
}

impl<E> Shelf<E>
where
    E: EventEmitter,
{
    /// The initial query is not issued before [`Self::refresh()`]
    /// is invoked for the first time.
    #[must_use]
    pub fn new(handle: Handle, initial_segment: Segment, event_emitter: E) -> Self {
        Self {
            handle,
            state: Observable::new(State::new(initial_segment)),
            event_emitter,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn read(&self) -> ObservableRef<'_, State> {
        self.state.read()
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscriber<State> {
        self.state.subscribe()
    }

    fn emit_event(&self, event: Event) {
        log::debug!("Emitting {event:?}");
        if let Err(NoReceiverForEvent) = self.event_emitter.emit_event(event) {
            log::warn!("No receiver for event");
        }
    }

    /// Re-issue the query for the current segment and search text.
    ///
    /// Neither the segment nor the cached scroll positions are affected.
    #[allow(clippy::must_use_candidate)]
    pub fn refresh(&self) -> bool {
        let params = self.read().params();
        let result = book::search(self.handle.library(), params.clone());
        let modified = self.state.modify(|state| match result {
            Ok(sections) => state.fetch_succeeded(params, sections),
            Err(err) => {
                log::warn!("Failed to fetch books: {err}");
                state.fetch_failed(params, &err)
            }
        });
        if modified {
            self.emit_event(Event::StateChanged);
        }
        modified
    }

    /// The list has become visible.
    #[allow(clippy::must_use_candidate)]
    pub fn did_appear(&self, current_position: ScrollPosition) -> bool {
        self.state
            .modify(|state| state.init_scroll_positions(current_position))
    }

    /// Show the books of another segment.
    ///
    /// Requesting the current segment has no effect.
    #[allow(clippy::must_use_candidate)]
    pub fn select_segment(&self, segment: Segment, current_position: ScrollPosition) -> bool {
        if !self.change_segment(segment, current_position) {
            return false;
        }
        let selected_index_path = self.read().selected_index_path();
        if let Some(index_path) = selected_index_path {
            self.emit_event(Event::SelectRow(index_path));
        }
        true
    }

    /// Query the books of another segment and restore its scroll position.
    ///
    /// The selected row is not touched.
    fn change_segment(&self, segment: Segment, current_position: ScrollPosition) -> bool {
        if !self
            .state
            .modify(|state| state.switch_segment(segment, current_position))
        {
            return false;
        }
        self.refresh();
        let restore_position = self.read().scroll_position(segment);
        if let Some(position) = restore_position {
            self.emit_event(Event::ScrollTo(position));
        }
        true
    }

    #[allow(clippy::must_use_candidate)]
    pub fn activate_search(&self) -> bool {
        self.update_search(|search| search.active = true)
    }

    /// Close the search overlay and discard its text.
    #[allow(clippy::must_use_candidate)]
    pub fn deactivate_search(&self) -> bool {
        self.update_search(|search| {
            search.active = false;
            search.text.clear();
        })
    }

    #[allow(clippy::must_use_candidate)]
    pub fn update_search_text(&self, text: &str) -> bool {
        self.update_search(|search| {
            if search.text != text {
                text.clone_into(&mut search.text);
            }
        })
    }

    /// Returns `true` if the query has been re-issued.
    fn update_search(&self, update: impl FnOnce(&mut SearchOverlay)) -> bool {
        let mut params_changed = false;
        self.state.modify(|state| {
            let params_before = state.params();
            let modified = state.update_search(update);
            params_changed = state.params() != params_before;
            modified
        });
        if !params_changed {
            return false;
        }
        self.refresh();
        true
    }

    /// Show a book in detail.
    ///
    /// Only [`Event::ShowDetails`] is emitted.
    #[allow(clippy::must_use_candidate)]
    pub fn show_book(&self, uid: BookUid) -> bool {
        if !self.state.modify(|state| state.select(uid)) {
            return false;
        }
        self.emit_event(Event::ShowDetails(uid));
        true
    }

    /// Navigate to a book, e.g. when continuing a user activity.
    ///
    /// Switches to the segment of the book, reveals its row and shows
    /// it in detail. Unknown books are ignored.
    #[allow(clippy::must_use_candidate)]
    pub fn restore_book(&self, uid: &BookUid, current_position: ScrollPosition) -> bool {
        let entity = match book::load_entity_by_uid(self.handle.library(), uid) {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                log::info!("Cannot restore unknown book {uid}");
                return false;
            }
            Err(err) => {
                log::warn!("Failed to load book {uid}: {err}");
                return false;
            }
        };
        self.emit_event(Event::DismissOverlay);
        self.state.modify(|state| state.select(*uid));
        let segment = Segment::for_read_state(entity.body.read_state);
        if !self.change_segment(segment, current_position)
            && self.read().index_path_of(uid).is_none()
        {
            // The results might not reflect recent modifications yet.
            self.refresh();
        }
        let index_path = self.read().index_path_of(uid);
        if let Some(index_path) = index_path {
            self.emit_event(Event::RevealRow(index_path));
        } else {
            log::debug!("Book {uid} is not contained in the current results");
        }
        self.emit_event(Event::ShowDetails(*uid));
        true
    }

    /// Delete a book.
    ///
    /// Returns `false` if the book didn't exist.
    pub fn delete_book(&self, uid: &BookUid) -> anyhow::Result<bool> {
        let purged = book::purge_entity(self.handle.library(), uid)?;
        if self.state.modify(|state| state.deselect(uid)) {
            self.emit_event(Event::ClearDetails);
        }
        Ok(purged)
    }
}
