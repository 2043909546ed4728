use nd_core::dashboard::{DashboardSummary, Trend};

use super::{escape, page_header};

pub fn render(summary: &DashboardSummary) -> String {
    let mut html = page_header("Dashboard", "Welcome back! Here's what's happening with your AI News system.");

    html.push_str("<section class=\"grid\">\n");
    for stat in &summary.stats {
        let trend = match stat.trend {
            Trend::Up => "success",
            Trend::Down => "error",
        };
        html.push_str(&format!(
            "<div class=\"card\"><p>{}</p><div class=\"value\">{}</div><p class=\"{}\">{} from yesterday</p></div>\n",
            escape(&stat.title),
            escape(&stat.value),
            trend,
            escape(&stat.change)
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"card\"><h2>System Status</h2><p>Current status of all system services</p><ul>\n");
    for service in &summary.services {
        html.push_str(&format!(
            "<li><strong>{}</strong> <span class=\"badge {}\">{}</span> <small>{}</small></li>\n",
            escape(&service.name),
            service.status.label().to_lowercase(),
            service.status.label(),
            escape(&service.last_active)
        ));
    }
    html.push_str("</ul></section>\n");

    html.push_str("<section class=\"card\"><h2>Recent Activity</h2><p>Latest actions and events from your system</p><ul>\n");
    for entry in &summary.activity {
        html.push_str(&format!(
            "<li class=\"{}\">{} <small>{} &bull; {}</small></li>\n",
            entry.status.as_str(),
            escape(&entry.action),
            escape(&entry.source),
            escape(&entry.time)
        ));
    }
    html.push_str("</ul></section>\n");

    html.push_str("<section class=\"card\"><h2>Next Scheduled Post</h2><p>Preview of the next post scheduled for publication</p>\n");
    match &summary.next_post {
        Some(post) => html.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p><small>Scheduled: {}</small> <a href=\"/content/posts/{}/preview\">Preview</a></article>\n",
            escape(&post.title),
            escape(post.content.lines().next().unwrap_or_default()),
            escape(&post.scheduled_for),
            post.id
        )),
        None => html.push_str("<p>Nothing is scheduled.</p>\n"),
    }
    html.push_str("</section>");
    html
}
