//! Page parsers
//!
//! Every function takes the URL the page came from (for error messages)
//! and its HTML text. Nothing here performs I/O.

use pcloud_core::{AlbumPage, AlbumRef, AttachmentRef, GroupPage, GroupRef, Overview, PartitionRef};
use scraper::{ElementRef, Html, Selector};

use crate::error::{ClientError, Result};

/// Title of the page the server renders when a login fails.
pub const LOGIN_PAGE_TITLE: &str = "Se connecter - PartitionCloud";

const PARTITION_ID_PREFIX: &str = "partition-";
const ATTACHMENT_ROUTE: &str = "/partition/attachment/";

fn selector(url: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ClientError::Markup {
        url: url.to_string(),
        element: format!("{css} ({e})"),
    })
}

fn missing(url: &str, element: &str) -> ClientError {
    ClientError::Markup {
        url: url.to_string(),
        element: element.to_string(),
    }
}

fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Last non-empty segment of a link, e.g. the id in `/albums/<id>`.
pub fn last_segment(href: &str) -> Option<&str> {
    let href = href.split(['?', '#']).next().unwrap_or(href);
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
}

fn album_links(scope: ElementRef<'_>, links: &Selector) -> Vec<AlbumRef> {
    scope
        .select(links)
        .filter_map(|a| {
            let id = a.value().attr("href").and_then(last_segment)?;
            Some(AlbumRef::new(id, text(a)))
        })
        .collect()
}

/// Whether `html` is the login form, i.e. credentials were refused.
pub fn is_login_page(html: &str) -> bool {
    let document = Html::parse_document(html);
    let Ok(title) = Selector::parse("title") else {
        return false;
    };
    document
        .select(&title)
        .next()
        .is_some_and(|t| text(t) == LOGIN_PAGE_TITLE)
}

/// Standalone albums and groups from the `/albums` page.
pub fn parse_overview(url: &str, html: &str) -> Result<Overview> {
    let document = Html::parse_document(html);
    let links = selector(url, "a")?;

    let albums_section = selector(url, "section#albums")?;
    let albums = document
        .select(&albums_section)
        .next()
        .map(|section| album_links(section, &links))
        .ok_or_else(|| missing(url, "section#albums"))?;

    let groups_section = selector(url, "section#groupes div.groupe-cover")?;
    let header = selector(url, "summary a")?;
    let cover = selector(url, "div.groupe-albums-cover")?;

    let mut groups = Vec::new();
    for group in document.select(&groups_section) {
        let Some(head) = group.select(&header).next() else {
            continue;
        };
        let Some(id) = head.value().attr("href").and_then(last_segment) else {
            continue;
        };
        let albums = group
            .select(&cover)
            .next()
            .map(|c| album_links(c, &links))
            .unwrap_or_default();

        groups.push(GroupRef::new(id, text(head)).with_albums(albums));
    }

    Ok(Overview { groups, albums })
}

/// Title and documents of an album page.
///
/// Entries without a `partition-<id>` identifier or without a name are
/// edit-only placeholders and are skipped.
pub fn parse_album(url: &str, html: &str) -> Result<AlbumPage> {
    let document = Html::parse_document(html);

    let title_sel = selector(url, "h2#album-title")?;
    let title = document
        .select(&title_sel)
        .next()
        .map(text)
        .ok_or_else(|| missing(url, "h2#album-title"))?;

    let grid = selector(url, "section#partitions-grid div.partition")?;
    let name_sel = selector(url, "div.partition-name")?;
    let author_sel = selector(url, "div.partition-author")?;

    let partitions = document
        .select(&grid)
        .filter_map(|div| {
            let id = div.value().id()?.strip_prefix(PARTITION_ID_PREFIX)?;
            let name = div.select(&name_sel).next().map(text)?;
            if id.is_empty() || name.is_empty() {
                return None;
            }
            let author = div.select(&author_sel).next().map(text).unwrap_or_default();
            Some(PartitionRef::new(id, name, author))
        })
        .collect();

    Ok(AlbumPage { title, partitions })
}

/// Title and albums of a group page.
pub fn parse_group(url: &str, html: &str) -> Result<GroupPage> {
    let document = Html::parse_document(html);

    let title_sel = selector(url, "h2#groupe-title")?;
    let title = document
        .select(&title_sel)
        .next()
        .map(text)
        .ok_or_else(|| missing(url, "h2#groupe-title"))?;

    let section = selector(url, "section#albums")?;
    let links = selector(url, "a")?;
    let albums = document
        .select(&section)
        .next()
        .map(|s| album_links(s, &links))
        .unwrap_or_default();

    Ok(GroupPage { title, albums })
}

/// Attachments listed on a partition's attachment page.
pub fn parse_attachments(url: &str, html: &str) -> Result<Vec<AttachmentRef>> {
    let document = Html::parse_document(html);
    let links = selector(url, "a[href]")?;

    let attachments = document
        .select(&links)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let (_, file) = href.split_once(ATTACHMENT_ROUTE)?;
            let (id, extension) = file.rsplit_once('.')?;
            Some(AttachmentRef {
                id: id.to_string(),
                extension: extension.to_lowercase(),
                title: text(a),
            })
        })
        .collect();

    Ok(attachments)
}
