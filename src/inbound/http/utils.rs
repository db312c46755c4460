use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use std::fs;
use std::path::PathBuf;

pub enum HtmlTemplate {
    Home,
}

const TEMPLATES_DIR: &str = "templates";

const TEMPLATE_HOME: &str = "home.html";

fn get_template_path(template: HtmlTemplate) -> (PathBuf, String) {
    let template_name = match template {
        HtmlTemplate::Home => TEMPLATE_HOME,
    };

    (
        PathBuf::from(TEMPLATES_DIR).join(template_name),
        template_name.to_string(),
    )
}

pub fn load_html(template: HtmlTemplate) -> String {
    let (path, name) = get_template_path(template);
    fs::read_to_string(path).unwrap_or_else(|_| format!("Failed to load {name} page"))
}

pub fn build_ok_html_response(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
