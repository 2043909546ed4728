//! Server-rendered HTML for the console screens.

use axum::http::StatusCode;
use nd_core::navigation::SidebarView;
use nd_core::Notice;

pub mod content;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod sources;

const STYLE: &str = "
body{margin:0;display:flex;font-family:system-ui,sans-serif;background:#0f1117;color:#e6e6e6}
a{color:inherit}
.sidebar{display:flex;flex-direction:column;height:100vh;border-right:1px solid #262a36;transition:width .3s}
.w-16{width:4rem}.w-64{width:16rem}
.nav-item{display:flex;align-items:center;gap:.75rem;padding:.5rem .75rem;border-radius:.5rem;text-decoration:none}
.nav-item.active{background:#4f46e5}
.icon{display:inline-block;width:1.25rem;height:1.25rem;border-radius:.25rem;background:#3b3f52}
main{flex:1;padding:1.5rem;overflow:auto}
.card{border:1px solid #262a36;border-radius:.75rem;padding:1rem;margin-bottom:1rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1rem}
.badge{border:1px solid #3b3f52;border-radius:999px;padding:0 .5rem;font-size:.75rem}
.toast{position:fixed;right:1rem;bottom:1rem;background:#1e2230;border:1px solid #4f46e5;border-radius:.5rem;padding:.75rem 1rem}
.success{color:#22c55e}.warning{color:#eab308}.error,.offline{color:#ef4444}.info{color:#6366f1}
form.inline{display:inline}
";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{} · AI News</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

pub fn render_sidebar(view: &SidebarView, path: &str) -> String {
    let mut html = format!("<aside class=\"sidebar {}\">\n<header>", view.width_class);
    if let Some(brand) = view.brand {
        html.push_str(&format!("<span class=\"brand\">{}</span>", escape(brand)));
    }
    html.push_str(&format!(
        "<form class=\"inline\" method=\"post\" action=\"/sidebar/toggle\"><input type=\"hidden\" name=\"return_to\" value=\"{}\"><button type=\"submit\" aria-label=\"toggle sidebar\">{}</button></form>",
        escape(path),
        if view.collapsed { "&#x203A;" } else { "&#x2039;" }
    ));
    html.push_str("</header>\n<nav>\n");
    for item in &view.items {
        let class = if item.active { "nav-item active" } else { "nav-item" };
        html.push_str(&format!("<a class=\"{}\" href=\"{}\"><span class=\"icon\"></span>", class, item.href));
        if let Some(label) = item.label {
            html.push_str(&format!("<span>{}</span>", escape(label)));
        }
        html.push_str("</a>\n");
    }
    html.push_str("</nav>\n");
    if let Some(operator) = &view.operator {
        html.push_str(&format!(
            "<footer class=\"operator\"><p>{}</p><p>{}</p></footer>\n",
            escape(&operator.name),
            escape(&operator.detail)
        ));
    }
    html.push_str("</aside>");
    html
}

pub fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"toast\" role=\"status\"><strong>{}</strong><p>{}</p></div>",
        escape(&notice.title),
        escape(&notice.description)
    )
}

/// A console screen: sidebar, main content and an optional toast.
pub fn layout(title: &str, sidebar: &SidebarView, path: &str, notice: Option<&Notice>, content: &str) -> String {
    let mut body = render_sidebar(sidebar, path);
    body.push_str("\n<main>\n");
    body.push_str(content);
    body.push_str("\n</main>");
    if let Some(notice) = notice {
        body.push('\n');
        body.push_str(&render_notice(notice));
    }
    document(title, &body)
}

/// A page without the sidebar, used by the login screen.
pub fn standalone(title: &str, content: &str) -> String {
    document(title, &format!("<main>\n{}\n</main>", content))
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    standalone(
        status.canonical_reason().unwrap_or("Error"),
        &format!(
            "<div class=\"card\"><h1>{}</h1><p>{}</p><a href=\"/\">Back to dashboard</a></div>",
            status.as_u16(),
            escape(message)
        ),
    )
}

pub(crate) fn page_header(title: &str, subtitle: &str) -> String {
    format!("<header><h1>{}</h1><p>{}</p></header>\n", escape(title), escape(subtitle))
}

pub(crate) fn stat_card(value: &str, label: &str) -> String {
    format!(
        "<div class=\"card\"><div class=\"value\">{}</div><p>{}</p></div>",
        escape(value),
        escape(label)
    )
}

pub(crate) fn post_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>",
        escape(action),
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::navigation::{SidebarState, NAVIGATION};
    use nd_core::session::Session;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_collapsed_sidebar_renders_no_labels() {
        let mut state = SidebarState::default();
        let expanded = render_sidebar(&state.view("/sources", &Session::Anonymous), "/sources");
        assert!(expanded.contains("w-64"));
        assert!(expanded.contains("AI News"));
        assert!(expanded.contains("Admin User"));
        for item in NAVIGATION {
            assert!(expanded.contains(&format!("<span>{}</span>", item.name)));
        }

        state.toggle();
        let collapsed = render_sidebar(&state.view("/sources", &Session::Anonymous), "/sources");
        assert!(collapsed.contains("w-16"));
        assert!(!collapsed.contains("AI News"));
        assert!(!collapsed.contains("Admin User"));
        for item in NAVIGATION {
            assert!(!collapsed.contains(item.name));
        }
        assert!(collapsed.contains("class=\"nav-item active\" href=\"/sources\""));
    }

    #[test]
    fn test_layout_includes_notice() {
        let view = SidebarState::default().view("/", &Session::Anonymous);
        let html = layout("Dashboard", &view, "/", Some(&Notice::rule_added()), "<p>hi</p>");
        assert!(html.contains("Rule added"));
        assert!(html.contains("<p>hi</p>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
