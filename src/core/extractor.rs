//! Locates the eGovernance service listing inside an arbitrary municipal
//! page. Site templates differ wildly, so candidates are found by an ordered
//! list of strategies over the parsed tree; the first strategy that produces
//! any hyperlinks wins, and zero matches overall is a normal outcome.

use crate::core::markers::contains_marker;
use crate::domain::model::ServiceRecord;
use crate::utils::error::Result;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));
static NAV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("nav").expect("static selector"));
static HEADER_LIST_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("header ul, header ol").expect("static selector"));

const HEADING_NAMES: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

type Strategy = for<'a> fn(&'a Html) -> Vec<ElementRef<'a>>;

/// Ordered fallback chain. Precision over guessing: if neither strategy
/// finds anything, the page has no detectable listing.
const STRATEGIES: &[Strategy] = &[marker_candidates, structural_candidates];

/// Extracts service records from raw page markup. Hyperlinks come back in
/// document order, one record each, links shaped by [`resolve_link`].
/// Malformed-but-parseable HTML never errors; an unrecognizable page yields
/// an empty vec.
pub fn extract(html: &str, base_url: &str) -> Result<Vec<ServiceRecord>> {
    if html.trim().is_empty() {
        return Ok(Vec::new());
    }

    let doc = Html::parse_document(html);

    for strategy in STRATEGIES {
        let anchors = strategy(&doc);
        if !anchors.is_empty() {
            return Ok(anchors
                .into_iter()
                .map(|anchor| build_record(anchor, base_url))
                .collect());
        }
    }

    Ok(Vec::new())
}

/// Strategy 1: signal search over every hyperlink. A hyperlink is a service
/// entry if, in priority order, (a) it or an ancestor carries a marked
/// class/id, (b) its visible text contains a marker, or (c) the nearest
/// preceding heading (or an ancestor's aria-label) contains a marker.
///
/// A text-matched hyperlink whose target is empty or fragment-only is a menu
/// label, not a destination; its parent list item's hyperlinks are pulled in
/// as well, the way dropdown service menus are built.
fn marker_candidates<'a>(doc: &'a Html) -> Vec<ElementRef<'a>> {
    let mut accepted = HashSet::new();

    for anchor in doc.select(&ANCHOR_SELECTOR) {
        if !(attribute_signal(anchor) || text_signal(anchor) || heading_signal(anchor)) {
            continue;
        }
        accepted.insert(anchor.id());

        let href = anchor.value().attr("href").unwrap_or_default();
        if text_signal(anchor) && is_placeholder_target(href) {
            if let Some(item) = parent_list_item(anchor) {
                for link in item.select(&ANCHOR_SELECTOR) {
                    accepted.insert(link.id());
                }
            }
        }
    }

    doc.select(&ANCHOR_SELECTOR)
        .filter(|anchor| accepted.contains(&anchor.id()))
        .collect()
}

/// Strategy 2: structural fallback for pages with no marker signals at all.
/// Takes every hyperlink of the first `<nav>` landmark, else of the first
/// header list whose every item holds exactly one hyperlink.
fn structural_candidates<'a>(doc: &'a Html) -> Vec<ElementRef<'a>> {
    for nav in doc.select(&NAV_SELECTOR) {
        let links: Vec<_> = nav.select(&ANCHOR_SELECTOR).collect();
        if !links.is_empty() {
            return links;
        }
    }

    for list in doc.select(&HEADER_LIST_SELECTOR) {
        let items: Vec<_> = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "li")
            .collect();
        if !items.is_empty()
            && items
                .iter()
                .all(|item| item.select(&ANCHOR_SELECTOR).count() == 1)
        {
            return list.select(&ANCHOR_SELECTOR).collect();
        }
    }

    Vec::new()
}

fn attribute_signal(anchor: ElementRef) -> bool {
    let mut scope = Some(anchor);
    while let Some(element) = scope {
        let value = element.value();
        if value.attr("class").is_some_and(contains_marker)
            || value.attr("id").is_some_and(contains_marker)
        {
            return true;
        }
        scope = element.parent().and_then(ElementRef::wrap);
    }
    false
}

fn text_signal(anchor: ElementRef) -> bool {
    contains_marker(&visible_text(anchor))
}

/// Walks outward from the hyperlink; at each level the nearest preceding
/// heading decides, and a marked aria-label (labeled navigation block)
/// short-circuits.
fn heading_signal(anchor: ElementRef) -> bool {
    let mut scope = Some(anchor);
    while let Some(element) = scope {
        if element.value().attr("aria-label").is_some_and(contains_marker) {
            return true;
        }
        for sibling in element.prev_siblings().filter_map(ElementRef::wrap) {
            if HEADING_NAMES.contains(&sibling.value().name()) {
                return contains_marker(&visible_text(sibling));
            }
        }
        scope = element.parent().and_then(ElementRef::wrap);
    }
    false
}

fn parent_list_item(anchor: ElementRef) -> Option<ElementRef> {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "li")
}

fn is_placeholder_target(href: &str) -> bool {
    let href = href.trim();
    href.is_empty() || href.starts_with('#')
}

fn build_record(anchor: ElementRef, base_url: &str) -> ServiceRecord {
    let href = anchor.value().attr("href").unwrap_or_default();
    // Empty names are preserved: icon-only links are legitimate entries.
    ServiceRecord::new(visible_text(anchor), resolve_link(href, base_url))
}

/// Trimmed, whitespace-collapsed visible text of an element.
fn visible_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Link policy: absolute targets pass through unchanged; root-relative
/// targets (`/`, `/ne`) are kept verbatim as the site wrote them; empty and
/// fragment-only targets mean the page itself; everything else resolves
/// against the base with any trailing slash trimmed.
fn resolve_link(href: &str, base_url: &str) -> String {
    let href = href.trim();
    if is_placeholder_target(href) {
        return base_url.to_string();
    }
    if href.starts_with('/') && !href.starts_with("//") {
        return href.to_string();
    }
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.as_str().trim_end_matches('/').to_string(),
        // A base we cannot parse leaves the raw target as-is.
        Err(_) => href.to_string(),
    }
}
