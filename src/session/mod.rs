mod driver;

pub use driver::{drive, Command, DriveSummary, HELP};

use thiserror::Error;

use crate::catalog::{Catalog, CourseRecord};
use crate::nav::{self, Key, DEFAULT_COLUMNS};
use crate::output::{announcement, Labels};
use crate::selector::{category_counts, select, Selection};
use crate::state::{Filter, ViewState};
use crate::urlcodec;

/// The rendering side of a session. `render` may be called repeatedly with
/// the same selection and must leave the same result.
pub trait Presenter {
    fn render(&mut self, selection: &Selection<'_>);

    fn announce(&mut self, message: &str);

    fn replace_location(&mut self, location: &str);

    fn focus(&mut self, _index: usize, _course: &CourseRecord) {}

    fn focus_filter(&mut self, _index: usize, _filter: &Filter) {}

    fn notice(&mut self, _message: &str) {}
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session cannot start without a {name}")]
    MissingCollaborator { name: &'static str },

    #[error("invalid column count {value}, expected at least 1")]
    InvalidColumns { value: usize },

    #[error("failed to read input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },
}

pub struct SessionBuilder<P> {
    catalog: Option<Catalog>,
    presenter: Option<P>,
    location: Option<String>,
    base_path: String,
    columns: usize,
    labels: Labels,
}

impl<P> Default for SessionBuilder<P> {
    fn default() -> Self {
        Self {
            catalog: None,
            presenter: None,
            location: None,
            base_path: "/".to_string(),
            columns: DEFAULT_COLUMNS,
            labels: Labels::default(),
        }
    }
}

impl<P: Presenter> SessionBuilder<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn presenter(mut self, presenter: P) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Address the session starts from. Only its query is read.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> Result<Session<P>, SessionError> {
        let catalog = self
            .catalog
            .ok_or(SessionError::MissingCollaborator { name: "catalog" })?;
        let presenter = self
            .presenter
            .ok_or(SessionError::MissingCollaborator { name: "presenter" })?;
        if self.columns == 0 {
            return Err(SessionError::InvalidColumns {
                value: self.columns,
            });
        }
        let state = match self.location.as_deref() {
            Some(location) => ViewState::from_partial(urlcodec::decode(location)),
            None => ViewState::default(),
        };
        let location = urlcodec::location(&self.base_path, &state);
        Ok(Session {
            catalog,
            state,
            presenter,
            labels: self.labels,
            base_path: self.base_path,
            columns: self.columns,
            focus: None,
            filter_focus: None,
            location,
        })
    }
}

/// Owns the catalog and the one view state of a page session.
pub struct Session<P: Presenter> {
    catalog: Catalog,
    state: ViewState,
    presenter: P,
    labels: Labels,
    base_path: String,
    columns: usize,
    focus: Option<usize>,
    filter_focus: Option<usize>,
    location: String,
}

impl<P: Presenter> Session<P> {
    pub fn builder() -> SessionBuilder<P> {
        SessionBuilder::new()
    }

    /// First render of the state restored from the starting location.
    pub fn start(&mut self) {
        self.refresh();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_filter(&self) -> Option<usize> {
        self.filter_focus
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn selection(&self) -> Selection<'_> {
        select(&self.catalog, &self.state)
    }

    /// Re-selects and pushes the result through render, announce and the
    /// location, in that order.
    pub fn refresh(&mut self) {
        let selection = select(&self.catalog, &self.state);
        self.presenter.render(&selection);
        let message = announcement(&self.labels, selection.total, selection.visible_count);
        self.presenter.announce(&message);
        self.location = urlcodec::location(&self.base_path, &self.state);
        self.presenter.replace_location(&self.location);
    }

    pub fn search_changed(&mut self, text: impl Into<String>) {
        self.state = self.state.on_search_changed(text);
        self.focus = None;
        self.refresh();
    }

    pub fn clear_search(&mut self) {
        self.search_changed(String::new());
    }

    pub fn filter_changed(&mut self, filter: impl Into<Filter>) {
        self.state = self.state.on_filter_changed(filter);
        self.focus = None;
        self.refresh();
    }

    /// Reveals one more page and returns the card that received focus.
    /// Does nothing when every match is already shown.
    pub fn reveal_more(&mut self) -> Option<usize> {
        let before = select(&self.catalog, &self.state);
        if !before.has_more {
            return None;
        }
        let shown_before = before.shown();
        self.state = self.state.on_reveal_more();
        self.refresh();
        let shown_after = select(&self.catalog, &self.state).shown();
        let target = nav::first_revealed(shown_before, shown_after)?;
        self.focus(target).then_some(target)
    }

    /// Moves focus with an arrow key and returns the newly focused index.
    /// Escape clears the search; Enter and Space activate the focused filter.
    pub fn navigate(&mut self, key: Key) -> Option<usize> {
        if key == Key::Escape {
            self.clear_search();
            return None;
        }
        if let Some(current) = self.filter_focus {
            return self.navigate_filters(current, key);
        }
        let current = self.focus?;
        let shown = select(&self.catalog, &self.state).shown();
        let next = nav::move_focus(current, shown, key, self.columns)?;
        self.focus(next).then_some(next)
    }

    fn navigate_filters(&mut self, current: usize, key: Key) -> Option<usize> {
        let counts = category_counts(&self.catalog);
        if key.activates() {
            let filter = counts.entries().get(current)?.filter.clone();
            self.filter_changed(filter);
            return Some(current);
        }
        let last = counts.entries().len().checked_sub(1)?;
        let next = match key {
            Key::Right => (current + 1).min(last),
            Key::Left => current.saturating_sub(1),
            _ => return None,
        };
        self.focus_filter(next).then_some(next)
    }

    /// Focuses a control of the filter bar; `All` is index 0.
    pub fn focus_filter(&mut self, index: usize) -> bool {
        let counts = category_counts(&self.catalog);
        let Some(entry) = counts.entries().get(index) else {
            return false;
        };
        self.focus = None;
        self.filter_focus = Some(index);
        self.presenter.focus_filter(index, &entry.filter);
        true
    }

    pub fn focus(&mut self, index: usize) -> bool {
        let selection = select(&self.catalog, &self.state);
        let Some(course) = selection.visible.get(index).copied() else {
            return false;
        };
        self.filter_focus = None;
        self.focus = Some(index);
        self.presenter.focus(index, course);
        true
    }

    pub fn notice(&mut self, message: &str) {
        self.presenter.notice(message);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{session, Recorder};
    use super::*;

    #[test]
    fn build_requires_presenter_and_catalog() {
        let err = SessionBuilder::<Recorder>::new()
            .catalog(Catalog::builtin())
            .build()
            .err();
        assert!(matches!(
            err,
            Some(SessionError::MissingCollaborator { name: "presenter" })
        ));

        let err = SessionBuilder::new()
            .presenter(Recorder::default())
            .build()
            .err();
        assert!(matches!(
            err,
            Some(SessionError::MissingCollaborator { name: "catalog" })
        ));
    }

    #[test]
    fn build_rejects_zero_columns() {
        let err = Session::builder()
            .catalog(Catalog::builtin())
            .presenter(Recorder::default())
            .columns(0)
            .build()
            .err();
        assert!(matches!(err, Some(SessionError::InvalidColumns { value: 0 })));
    }

    #[test]
    fn start_restores_state_from_location() {
        let mut s = session(Some("/courses?category=Marketing&search=ads"));
        s.start();
        assert_eq!(s.state().filter().as_str(), "Marketing");
        assert_eq!(s.state().search(), "ads");
        let p = s.presenter();
        assert_eq!(p.renders, vec![vec![1]]);
        assert_eq!(p.announcements, vec!["Showing 1 of 1 courses".to_string()]);
        assert_eq!(
            p.locations,
            vec!["/courses?category=Marketing&search=ads".to_string()]
        );
    }

    #[test]
    fn every_render_rewrites_location_even_when_empty() {
        let mut s = session(None);
        s.start();
        s.search_changed("no such course");
        s.filter_changed("Design");
        let p = s.presenter();
        assert_eq!(p.renders.len(), 3);
        assert_eq!(p.locations.len(), 3);
        assert_eq!(p.locations[0], "/courses");
        assert_eq!(p.locations[1], "/courses?search=no+such+course");
        assert_eq!(p.announcements[1], "No courses found");
        assert_eq!(
            p.locations[2],
            "/courses?category=Design&search=no+such+course"
        );
    }

    #[test]
    fn reveal_more_focuses_first_new_card() {
        let mut s = session(None);
        s.start();
        assert_eq!(s.reveal_more(), Some(9));
        assert_eq!(s.focused(), Some(9));
        assert_eq!(s.presenter().focused, vec![(9, 10)]);
        assert_eq!(s.presenter().has_more, vec![true, false]);
        assert_eq!(s.reveal_more(), None);
        assert_eq!(s.state().visible_count(), 18);
        assert_eq!(s.presenter().renders.len(), 2);
    }

    #[test]
    fn arrows_move_focus_within_shown_cards() {
        let mut s = session(None);
        s.start();
        assert_eq!(s.navigate(Key::Down), None);
        assert!(s.focus(1));
        assert_eq!(s.navigate(Key::Down), Some(4));
        assert_eq!(s.navigate(Key::Down), Some(7));
        assert_eq!(s.navigate(Key::Down), Some(8));
        assert_eq!(s.navigate(Key::Left), Some(7));
        assert_eq!(s.navigate(Key::Up), Some(4));
        assert!(!s.focus(9));
    }

    #[test]
    fn enter_and_space_activate_the_focused_filter() {
        let mut s = session(None);
        s.start();
        assert_eq!(s.navigate(Key::Enter), None);
        assert!(!s.focus_filter(6));

        assert!(s.focus(2));
        assert!(s.focus_filter(1));
        assert_eq!(s.focused(), None);
        assert_eq!(s.navigate(Key::Enter), Some(1));
        assert_eq!(s.state().filter().as_str(), "Marketing");
        assert_eq!(s.presenter().renders.last(), Some(&vec![1, 4, 12]));

        assert_eq!(s.navigate(Key::Right), Some(2));
        assert_eq!(s.navigate(Key::Down), None);
        assert_eq!(s.navigate(Key::Space), Some(2));
        assert_eq!(s.state().filter().as_str(), "Management");
        assert_eq!(s.focused_filter(), Some(2));
        assert_eq!(
            s.presenter().filters_focused,
            vec![(1, "Marketing".to_string()), (2, "Management".to_string())]
        );

        assert_eq!(s.navigate(Key::Left), Some(1));
        assert_eq!(s.navigate(Key::Left), Some(0));
        assert_eq!(s.navigate(Key::Left), Some(0));
        assert_eq!(s.navigate(Key::Enter), Some(0));
        assert!(s.state().filter().is_all());

        assert!(s.focus(0));
        assert_eq!(s.focused_filter(), None);
    }

    #[test]
    fn escape_clears_search_and_focus() {
        let mut s = session(Some("?search=design"));
        s.start();
        assert!(s.focus(0));
        assert_eq!(s.navigate(Key::Escape), None);
        assert_eq!(s.state().search(), "");
        assert_eq!(s.focused(), None);
        assert_eq!(s.location(), "/courses");
    }
}
