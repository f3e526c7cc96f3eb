use colored::Colorize;
use itertools::Itertools;

use super::{Labels, Snapshot};
use crate::catalog::CourseRecord;
use crate::selector::Selection;
use crate::session::Presenter;
use crate::state::Filter;

/// Keeps the latest render as a [`Snapshot`] for the one-shot output formats.
#[derive(Clone, Debug, Default)]
pub struct SnapshotPresenter {
    labels: Labels,
    snapshot: Option<Snapshot>,
    renders: usize,
}

impl SnapshotPresenter {
    pub fn new(labels: Labels) -> Self {
        Self {
            labels,
            snapshot: None,
            renders: 0,
        }
    }

    pub fn into_snapshot(self) -> Option<Snapshot> {
        self.snapshot
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Presenter for SnapshotPresenter {
    fn render(&mut self, selection: &Selection<'_>) {
        let location = self
            .snapshot
            .as_ref()
            .map(|s| s.location.clone())
            .unwrap_or_default();
        let mut snapshot = Snapshot::capture(selection, &self.labels);
        snapshot.location = location;
        self.snapshot = Some(snapshot);
        self.renders += 1;
    }

    fn announce(&mut self, message: &str) {
        if let Some(s) = self.snapshot.as_mut() {
            s.announcement = message.to_string();
        }
    }

    fn replace_location(&mut self, location: &str) {
        if let Some(s) = self.snapshot.as_mut() {
            s.location = location.to_string();
        }
    }
}

/// Draws each render to stdout for the interactive session.
#[derive(Clone, Debug, Default)]
pub struct TerminalPresenter {
    labels: Labels,
}

impl TerminalPresenter {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    fn card_line(&self, index: usize, course: &CourseRecord) -> String {
        format!(
            "{:>3}. {} {} {} {}",
            index + 1,
            course.title.bold().white(),
            format!("[{}]", course.category).cyan(),
            self.labels.price(course.price).yellow(),
            course.author.dimmed()
        )
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, selection: &Selection<'_>) {
        let filters = selection
            .counts
            .entries()
            .iter()
            .map(|e| {
                let label = format!("{} ({})", self.labels.filter_label(&e.filter), e.count);
                if &e.filter == selection.filter {
                    label.bold().green().to_string()
                } else {
                    label
                }
            })
            .join(" | ");
        println!();
        println!("{}", filters);
        if !selection.search.is_empty() {
            println!("{} {}", "search:".bold().white(), selection.search.purple());
        }
        if selection.is_empty() {
            println!("{}", self.labels.empty_title.bold().red());
            println!("{}", self.labels.empty_hint.dimmed());
            return;
        }
        for (i, course) in selection.visible.iter().enumerate() {
            println!("{}", self.card_line(i, course));
        }
        if selection.has_more {
            println!("{}", format!("[{}: /more]", self.labels.load_more).bold().blue());
        }
    }

    fn announce(&mut self, message: &str) {
        println!(":: {:<10}: {}", "Status", message);
    }

    fn replace_location(&mut self, location: &str) {
        println!(":: {:<10}: {}", "Location", location);
    }

    fn focus(&mut self, index: usize, course: &CourseRecord) {
        println!("{} {}", ">".bold().green(), self.card_line(index, course));
    }

    fn focus_filter(&mut self, index: usize, filter: &Filter) {
        println!(
            "{} [{}] {}",
            ">".bold().green(),
            index + 1,
            self.labels.filter_label(filter).bold()
        );
    }

    fn notice(&mut self, message: &str) {
        println!("{}{}{} {}", "[".bold().white(), "*".bold().yellow(), "]".bold().white(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::session::Session;

    #[test]
    fn snapshot_tracks_latest_render() {
        let mut session = Session::builder()
            .catalog(Catalog::builtin())
            .presenter(SnapshotPresenter::new(Labels::default()))
            .base_path("/catalog")
            .location("?category=HR+%26+Recruiting")
            .build()
            .unwrap();
        session.start();
        session.search_changed("human");

        let presenter = session.into_presenter();
        assert_eq!(presenter.renders(), 2);
        let snapshot = presenter.into_snapshot().unwrap();
        assert_eq!(snapshot.location, "/catalog?category=HR+%26+Recruiting&search=human");
        assert_eq!(snapshot.total, 1);
        assert_eq!(snapshot.courses[0].id, 8);
        assert_eq!(snapshot.announcement, "Showing 1 of 1 courses");
        assert!(snapshot.counts.iter().any(|c| c.active && c.count == 2));
    }
}
