use nd_core::{Source, SourceKind, SourceStats};

use super::{escape, page_header, post_button, stat_card};

fn kind_options(selected: SourceKind) -> String {
    SourceKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                kind.as_str(),
                if *kind == selected { " selected" } else { "" },
                kind.label()
            )
        })
        .collect()
}

/// The add/edit dialog. Editing posts back to the source's own route.
pub fn source_form(source: Option<&Source>) -> String {
    let (title, action, button) = match source {
        Some(s) => ("Edit Source", format!("/sources/{}", s.id), "Update Source"),
        None => ("Add New Source", "/sources".to_string(), "Add Source"),
    };
    format!(
        "<section class=\"card dialog\"><h2>{title}</h2><p>Configure a news source for your AI aggregation system.</p>
<form method=\"post\" action=\"{action}\">
<label for=\"name\">Source Name</label><input id=\"name\" name=\"name\" value=\"{name}\" placeholder=\"e.g., TechCrunch\" required>
<label for=\"url\">URL</label><input id=\"url\" name=\"url\" value=\"{url}\" placeholder=\"https://example.com/feed.xml\" required>
<label for=\"kind\">Source Type</label><select id=\"kind\" name=\"kind\">{options}</select>
<a href=\"/sources\">Cancel</a> <button type=\"submit\">{button}</button>
</form></section>",
        title = title,
        action = action,
        name = escape(source.map(|s| s.name.as_str()).unwrap_or_default()),
        url = escape(source.map(|s| s.url.as_str()).unwrap_or_default()),
        options = kind_options(source.map(|s| s.kind).unwrap_or_default()),
        button = button,
    )
}

fn source_row(source: &Source) -> String {
    format!(
        "<li class=\"card source\" id=\"source-{id}\"><h3>{name} <span class=\"badge\">{kind}</span></h3>
<p>{url}</p><small>Last sync: {last_sync}</small> <small>Articles: {count}</small>
<div class=\"actions\"><span class=\"{state_class}\">{state}</span> {toggle} <a href=\"{url}\" target=\"_blank\" rel=\"noopener\">Open</a> <a href=\"/sources/{id}/edit\">Edit</a> {delete}</div></li>\n",
        id = source.id,
        name = escape(&source.name),
        kind = source.kind.as_str().to_uppercase(),
        url = escape(&source.url),
        last_sync = escape(&source.last_sync),
        count = source.article_count,
        state_class = if source.is_active { "success" } else { "offline" },
        state = if source.is_active { "Active" } else { "Inactive" },
        toggle = post_button(
            &format!("/sources/{}/toggle", source.id),
            if source.is_active { "Deactivate" } else { "Activate" }
        ),
        delete = post_button(&format!("/sources/{}/delete", source.id), "Delete"),
    )
}

pub fn render(sources: &[Source]) -> String {
    let stats = SourceStats::from_sources(sources);
    let mut html = page_header("News Sources", "Manage and configure your news sources for content aggregation.");
    html.push_str("<section class=\"grid\">");
    html.push_str(&stat_card(&stats.total.to_string(), "Total Sources"));
    html.push_str(&stat_card(&stats.active.to_string(), "Active Sources"));
    html.push_str(&stat_card(&stats.articles.to_string(), "Total Articles"));
    html.push_str("</section>\n");

    html.push_str(&source_form(None));

    html.push_str(
        "\n<section class=\"card\"><h2>Configured Sources</h2><p>All news sources currently configured in your system.</p><ul>\n",
    );
    for source in sources {
        html.push_str(&source_row(source));
    }
    html.push_str("</ul></section>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Source {
        Source {
            id: 7,
            name: "Tom's <Hardware>".to_string(),
            url: "https://tomshardware.com/feeds/all".to_string(),
            kind: SourceKind::Website,
            is_active: false,
            last_sync: "Never".to_string(),
            article_count: 12,
        }
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let html = source_form(Some(&source()));
        assert!(html.contains("Edit Source"));
        assert!(html.contains("action=\"/sources/7\""));
        assert!(html.contains("value=\"Tom&#39;s &lt;Hardware&gt;\""));
        assert!(html.contains("<option value=\"website\" selected>"));
        assert!(html.contains("Update Source"));
    }

    #[test]
    fn test_add_form_defaults_to_rss() {
        let html = source_form(None);
        assert!(html.contains("Add New Source"));
        assert!(html.contains("<option value=\"rss\" selected>"));
    }

    #[test]
    fn test_render_lists_stats_and_rows() {
        let html = render(&[source()]);
        assert!(html.contains("Total Sources"));
        assert!(html.contains("id=\"source-7\""));
        assert!(html.contains("WEBSITE"));
        assert!(html.contains("Activate"));
    }
}
