use super::escape;

pub fn render(email: &str, error: Option<&str>) -> String {
    let error = error
        .map(|e| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(e)))
        .unwrap_or_default();
    format!(
        "<section class=\"card login\">
<h1>AI News Aggregator</h1><p>Sign in to your admin panel to manage your AI news system</p>
{error}<form method=\"post\" action=\"/login\">
<label for=\"email\">Email</label><input id=\"email\" name=\"email\" type=\"email\" value=\"{email}\" placeholder=\"admin@ai-news.com\" required>
<label for=\"password\">Password</label><input id=\"password\" name=\"password\" type=\"password\" placeholder=\"Enter your password\" required>
<button type=\"submit\">Sign In</button>
</form>
<p>Or continue as</p>
<form method=\"post\" action=\"/login/guest\"><button type=\"submit\">Continue as Guest</button></form>
<p><small>Guest mode provides read-only access to the dashboard</small></p>
</section>",
        error = error,
        email = escape(email),
    )
}
