//! Public HTML pages: home, per-agent widget page and the 404 page.

use super::SharedState;
use crate::agent::Agent;
use crate::config::WidgetConfig;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let agents = state.registry.list().await;
    Html(render_home(&agents))
}

pub async fn agent_page(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    match state.registry.get(&name).await {
        Some(agent) => Html(render_agent(&agent, &state.widget)).into_response(),
        None => not_found().await,
    }
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
}

fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
        text(title),
        head_extra,
        body
    )
}

pub fn render_home(agents: &[Agent]) -> String {
    let mut body = String::from(
        "<main class=\"home\">\n<h1>Voice Agent Directory</h1>\n\
         <p>Each agent has its own page, like /agent/spanish or /agent/support.</p>\n",
    );
    if !agents.is_empty() {
        body.push_str("<h2>Available Agents</h2>\n<ul class=\"agents\">\n");
        for agent in agents {
            body.push_str(&format!(
                "<li><h3>{}</h3><code>{}</code> <a href=\"{}\">Start Voice Call</a></li>\n",
                text(&agent.heading()),
                text(&agent.public_path()),
                attr(&agent.public_path()),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("</main>");
    layout("Voice Agent Directory", "", &body)
}

pub fn render_agent(agent: &Agent, widget: &WidgetConfig) -> String {
    let title = format!("{} Voice Agent", agent.title());
    let description = format!(
        "Start a voice conversation with the {} agent",
        agent.title()
    );
    let head = format!(
        "<meta name=\"description\" content=\"{}\">\n\
         <script async type=\"text/javascript\" src=\"{}\"></script>\n",
        attr(&description),
        attr(&widget.script_url),
    );
    let public_key = widget.public_key.as_deref().unwrap_or_default();
    let body = format!(
        "<main class=\"agent\">\n<h1>{}</h1>\n<p>Voice Agent</p>\n\
         <section class=\"widget\">\n<h3>Talk to {} Assistant</h3>\n\
         <p>Click the voice button below to start your conversation</p>\n\
         <vapi-widget assistant-id=\"{}\" public-key=\"{}\"></vapi-widget>\n\
         </section>\n<a href=\"/\">Back to Home</a>\n</main>",
        text(&agent.heading()),
        text(&agent.display_name()),
        attr(&agent.assistant_id),
        attr(public_key),
    );
    layout(&title, &head, &body)
}

pub fn render_not_found() -> String {
    layout(
        "Agent Not Found",
        "",
        "<main class=\"not-found\">\n<h1>404</h1>\n<h2>Agent Not Found</h2>\n\
         <p>The agent you&#x27;re looking for doesn&#x27;t exist.</p>\n\
         <a href=\"/\">Back to Home</a>\n</main>",
    )
}
