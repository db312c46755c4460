use actix_web::HttpResponse;

use crate::inbound::http::utils::{build_ok_html_response, load_html, HtmlTemplate};

pub async fn home() -> HttpResponse {
    build_ok_html_response(load_html(HtmlTemplate::Home))
}
