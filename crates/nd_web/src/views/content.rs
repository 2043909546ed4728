use nd_core::pipeline::{ContentBoard, KanbanColumn, PostPreview};

use super::{escape, page_header, post_button, stat_card};

fn column_header<T>(column: &KanbanColumn<T>) -> String {
    format!(
        "<section class=\"card column\" data-stage=\"{}\"><h2>{} <span class=\"badge\">{}</span></h2>\n",
        column.stage.as_str(),
        escape(column.title),
        escape(&column.badge)
    )
}

pub fn render(board: &ContentBoard) -> String {
    let mut html = page_header(
        "Content Pipeline",
        "Monitor and manage your content from raw articles to published posts.",
    );
    html.push_str(&post_button("/content/process", "Force Process Articles"));

    html.push_str("\n<section class=\"grid\">");
    html.push_str(&stat_card(&board.stats.new_articles.to_string(), "New Articles"));
    html.push_str(&stat_card(&board.stats.ready_to_publish.to_string(), "Ready to Publish"));
    html.push_str(&stat_card(&board.stats.published_today.to_string(), "Published Today"));
    html.push_str(&stat_card(&format!("{}%", board.stats.processing_success), "Processing Success"));
    html.push_str("</section>\n<div class=\"grid kanban\">\n");

    html.push_str(&column_header(&board.new));
    for article in &board.new.items {
        html.push_str(&format!(
            "<article class=\"card\"><span class=\"badge\">New</span><h3>{}</h3><small>{} &bull; {}</small><p>{}</p></article>\n",
            escape(&article.title),
            escape(&article.source),
            escape(&article.timestamp),
            escape(&article.content)
        ));
    }
    html.push_str("</section>\n");

    html.push_str(&column_header(&board.ready));
    for post in &board.ready.items {
        html.push_str(&format!(
            "<article class=\"card\"><span class=\"badge\">Draft</span><h3>{}</h3><small>{} &bull; {}</small>",
            escape(&post.title),
            escape(&post.source),
            escape(&post.timestamp)
        ));
        if let Some(image) = &post.image {
            html.push_str(&format!("<img src=\"{}\" alt=\"Post preview\" width=\"240\">", escape(image)));
        }
        html.push_str(&format!(
            "<p>Scheduled: {}</p><a href=\"/content/posts/{id}/preview\">Preview</a> {} {} {}</article>\n",
            escape(&post.scheduled_for),
            post_button(&format!("/content/posts/{}/edit", post.id), "Edit"),
            post_button(&format!("/content/posts/{}/delete", post.id), "Delete"),
            post_button(&format!("/content/posts/{}/publish", post.id), "Publish"),
            id = post.id,
        ));
    }
    html.push_str("</section>\n");

    html.push_str(&column_header(&board.published));
    for post in &board.published.items {
        html.push_str(&format!(
            "<article class=\"card\"><span class=\"badge\">Published</span><h3>{}</h3><small>{}</small><p>{} views &bull; {} likes &bull; {} shares</p></article>\n",
            escape(&post.title),
            escape(&post.published_at),
            post.engagement.views,
            post.engagement.likes,
            post.engagement.shares
        ));
    }
    html.push_str("</section>\n</div>");
    html
}

pub fn render_preview(preview: &PostPreview) -> String {
    let mut html = page_header("Post Preview", "This is how your post will appear in Telegram");
    html.push_str("<article class=\"card preview\">");
    if let Some(image) = &preview.image {
        html.push_str(&format!("<img src=\"{}\" alt=\"Post image\" width=\"400\">", escape(image)));
    }
    html.push_str(&format!(
        "<h2>{}</h2><pre>{}</pre></article>\n<a href=\"/content\">Back to pipeline</a>",
        escape(&preview.title),
        escape(&preview.content)
    ));
    html
}
