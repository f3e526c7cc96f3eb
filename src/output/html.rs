use super::{avatar_url, category_class, escape_html, Labels, Snapshot};
use crate::catalog::CourseRecord;

#[derive(Clone, Debug)]
pub struct HtmlOptions<'a> {
    pub labels: &'a Labels,
    pub avatar_template: &'a str,
}

pub fn render_card_html(course: &CourseRecord, opts: &HtmlOptions<'_>) -> String {
    let category = escape_html(&course.category);
    let title = escape_html(&course.title);
    let author = escape_html(&course.author);
    let price = escape_html(&opts.labels.price(course.price));
    let avatar = escape_html(&avatar_url(opts.avatar_template, &course.author));
    format!(
        r#"<article class="card" data-id="{id}" data-category="{category}" tabindex="0" role="article" aria-label="{title} course">
  <div class="card__image">
    <img src="{avatar}" alt="{author}" class="card__image-photo" loading="lazy">
  </div>
  <div class="card__content">
    <span class="card__category card__category--{class}" aria-label="Category: {category}">{category}</span>
    <h3 class="card__title">{title}</h3>
    <div class="card__footer">
      <span class="card__price" aria-label="Price: {price}">{price}</span>
      <span class="card__author">{author}</span>
    </div>
  </div>
</article>
"#,
        id = course.id,
        class = category_class(&course.category),
    )
}

fn render_filters(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"filters\" role=\"toolbar\">\n");
    for c in &snapshot.counts {
        let class = if c.active {
            "filters__button filters__button--active"
        } else {
            "filters__button"
        };
        out.push_str(&format!(
            "  <button class=\"{class}\" data-filter=\"{filter}\" aria-pressed=\"{pressed}\" type=\"button\">{label} <span class=\"filters__count\">{count}</span></button>\n",
            filter = escape_html(c.filter.as_str()),
            pressed = c.active,
            label = escape_html(&c.label),
            count = c.count,
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Widget fragment for one snapshot: filters, search box, cards (or the empty
/// state), the load-more button and the status region.
pub fn render_page(snapshot: &Snapshot, opts: &HtmlOptions<'_>) -> Vec<u8> {
    let labels = opts.labels;
    let mut out = String::new();
    out.push_str(&format!(
        "<section class=\"catalog\" data-location=\"{}\">\n",
        escape_html(&snapshot.location)
    ));
    out.push_str(&format!(
        "<input class=\"search\" data-search type=\"search\" placeholder=\"{}\" value=\"{}\">\n",
        escape_html(&labels.search_placeholder),
        escape_html(&snapshot.search)
    ));
    out.push_str(&render_filters(snapshot));
    out.push_str("<div class=\"cards\" data-cards>\n");
    if snapshot.is_empty() {
        out.push_str(&format!(
            "<div class=\"cards__empty\" role=\"status\" aria-live=\"polite\">\n  <p class=\"cards__empty-text\">{}</p>\n  <p class=\"cards__empty-hint\">{}</p>\n</div>\n",
            escape_html(&labels.empty_title),
            escape_html(&labels.empty_hint)
        ));
    } else {
        for course in &snapshot.courses {
            out.push_str(&render_card_html(course, opts));
        }
    }
    out.push_str("</div>\n");
    let hidden = if snapshot.has_more { "" } else { " button--hidden" };
    out.push_str(&format!(
        "<button class=\"button{hidden}\" data-load-more type=\"button\">{}</button>\n",
        escape_html(&labels.load_more)
    ));
    out.push_str(&format!(
        "<div id=\"results-announcement\" class=\"sr-only\" role=\"status\" aria-live=\"polite\" aria-atomic=\"true\">{}</div>\n",
        escape_html(&snapshot.announcement)
    ));
    out.push_str("</section>\n");
    out.into_bytes()
}
