pub mod console;
pub mod html;
pub mod presenter;

use std::sync::OnceLock;

use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::catalog::CourseRecord;
use crate::selector::Selection;
use crate::state::Filter;

pub const DEFAULT_AVATAR_TEMPLATE: &str =
    "https://ui-avatars.com/api/?name={name}&size=400&background=random&color=fff&bold=true";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// Display strings. Swapping these is how a translated widget is produced.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    pub all: String,
    pub empty_title: String,
    pub empty_hint: String,
    pub no_results: String,
    /// `{shown}` and `{total}` are substituted.
    pub showing: String,
    pub load_more: String,
    pub search_placeholder: String,
    pub currency: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            all: "All".to_string(),
            empty_title: "No courses found matching your criteria".to_string(),
            empty_hint: "Try adjusting your search or filters".to_string(),
            no_results: "No courses found".to_string(),
            showing: "Showing {shown} of {total} courses".to_string(),
            load_more: "Load more".to_string(),
            search_placeholder: "Search Course...".to_string(),
            currency: "$".to_string(),
        }
    }
}

impl Labels {
    pub fn filter_label<'a>(&'a self, filter: &'a Filter) -> &'a str {
        match filter {
            Filter::All => self.all.as_str(),
            Filter::Category(name) => name.as_str(),
        }
    }

    pub fn price(&self, price: f64) -> String {
        format!("{}{}", self.currency, price)
    }
}

/// Live-region status text for a result of `total` matches with
/// `visible_count` cards requested.
pub fn announcement(labels: &Labels, total: usize, visible_count: usize) -> String {
    if total == 0 {
        return labels.no_results.clone();
    }
    labels
        .showing
        .replace("{shown}", &visible_count.min(total).to_string())
        .replace("{total}", &total.to_string())
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn ampersand_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+&\s+").expect("static pattern"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// CSS modifier for a category: "HR & Recruiting" becomes "hr-recruiting".
pub fn category_class(category: &str) -> String {
    let lower = category.to_lowercase();
    let joined = ampersand_separator().replace_all(&lower, "-");
    whitespace_run().replace_all(&joined, "-").into_owned()
}

/// Bytes a URI component keeps as-is; everything else is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn avatar_url(template: &str, author: &str) -> String {
    let name = utf8_percent_encode(author, URI_COMPONENT).to_string();
    template.replace("{name}", &name)
}

#[derive(Clone, Debug, Serialize)]
pub struct CountRecord {
    pub filter: Filter,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// Serializable copy of one rendered view.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub location: String,
    pub filter: Filter,
    pub search: String,
    pub visible_count: usize,
    pub shown: usize,
    pub total: usize,
    pub has_more: bool,
    pub announcement: String,
    pub counts: Vec<CountRecord>,
    pub courses: Vec<CourseRecord>,
}

impl Snapshot {
    pub fn capture(selection: &Selection<'_>, labels: &Labels) -> Self {
        let counts = selection
            .counts
            .entries()
            .iter()
            .map(|e| CountRecord {
                filter: e.filter.clone(),
                label: labels.filter_label(&e.filter).to_string(),
                count: e.count,
                active: &e.filter == selection.filter,
            })
            .collect();
        Self {
            location: String::new(),
            filter: selection.filter.clone(),
            search: selection.search.to_string(),
            visible_count: selection.visible_count,
            shown: selection.shown(),
            total: selection.total,
            has_more: selection.has_more,
            announcement: announcement(labels, selection.total, selection.visible_count),
            counts,
            courses: selection.visible.iter().map(|c| (*c).clone()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

pub fn render_text(snapshot: &Snapshot, labels: &Labels) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(&format!("location: {}\n", snapshot.location));
    let filters = snapshot
        .counts
        .iter()
        .map(|c| {
            if c.active {
                format!("[{} ({})]", c.label, c.count)
            } else {
                format!("{} ({})", c.label, c.count)
            }
        })
        .join(" | ");
    out.push_str(&format!("filters: {filters}\n"));
    if !snapshot.search.is_empty() {
        out.push_str(&format!("search: {}\n", snapshot.search));
    }
    out.push('\n');
    if snapshot.is_empty() {
        out.push_str(&labels.empty_title);
        out.push('\n');
        out.push_str(&labels.empty_hint);
        out.push('\n');
    } else {
        for c in &snapshot.courses {
            out.push_str(&format!(
                "{:>3}  {}  [{}]  {}  {}\n",
                c.id,
                c.title,
                c.category,
                labels.price(c.price),
                c.author
            ));
        }
    }
    out.push('\n');
    out.push_str(&snapshot.announcement);
    out.push('\n');
    if snapshot.has_more {
        out.push_str(&format!("({})\n", labels.load_more));
    }
    out.into_bytes()
}

pub fn render_json(snapshot: &Snapshot) -> Vec<u8> {
    serde_json::to_vec_pretty(snapshot).unwrap_or_else(|_| b"{}\n".to_vec())
}
