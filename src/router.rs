use crate::app::App;
use crate::catalog::Catalog;
use crate::domain::carousel::CarouselController;
use crate::domain::contact::{acknowledge, Acknowledgment, ContactForm};
use crate::errors::ServerError;
use crate::query::{showcase_query, ShowcaseParams};
use crate::responses::{css_response, html_response, redirect_response, text_response, ResultResp};
use crate::templates::{self, HomeVm};
use astra::Request;
use chrono::{Datelike, Utc};
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

const KNOWN_PATHS: [&str; 5] = ["/", "/showcase", "/contact", "/static/main.css", "/healthz"];

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, app),
        ("GET", "/showcase") => showcase(&req, app),
        ("POST", "/contact") => contact(req, app),
        ("GET", "/static/main.css") => css_response(),
        ("GET", "/healthz") => text_response("ok"),
        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, app: &App) -> ResultResp {
    let carousel = carousel_from_query(req, app)?;
    html_response(render_home(app, &carousel, None))
}

/// htmx swaps get the section alone; plain navigation is bounced to the
/// full page at the resulting state.
fn showcase(req: &Request, app: &App) -> ResultResp {
    let carousel = carousel_from_query(req, app)?;

    if is_htmx(req) {
        html_response(templates::showcase_section(&carousel, app.projection))
    } else {
        let query = showcase_query(carousel.state(), None);
        redirect_response(&format!("/?{query}#showcase"))
    }
}

fn contact(req: Request, app: &App) -> ResultResp {
    if let Some(content_type) = req.headers().get("Content-Type") {
        let content_type = content_type.to_str().unwrap_or("");
        if !content_type.starts_with("application/x-www-form-urlencoded") {
            return Err(ServerError::BadRequest(format!(
                "unsupported content type: {content_type}"
            )));
        }
    }

    let htmx = is_htmx(&req);

    // One byte past the limit tells "exactly at the limit" from "too large".
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    let form = ContactForm::from_urlencoded(&body)?;
    let ack = acknowledge(&form, Utc::now());

    if htmx {
        html_response(templates::contact_panel(Some(&ack)))
    } else {
        let carousel = CarouselController::new(&app.catalog);
        html_response(render_home(app, &carousel, Some(&ack)))
    }
}

fn carousel_from_query<'a>(
    req: &Request,
    app: &'a App,
) -> Result<CarouselController<'a, Catalog>, ServerError> {
    let params = ShowcaseParams::parse(req.uri().query())?;

    let mut carousel = CarouselController::restore(&app.catalog, params.category, params.index);
    if let Some(command) = params.command {
        let scroll = carousel.apply(command);
        tracing::debug!(?command, index = scroll.index, "carousel navigated");
    }

    Ok(carousel)
}

fn render_home(
    app: &App,
    carousel: &CarouselController<'_, Catalog>,
    ack: Option<&Acknowledgment>,
) -> maud::Markup {
    templates::home_page(&HomeVm {
        catalog: &app.catalog,
        carousel,
        projection: app.projection,
        acknowledgment: ack,
        htmx_src: &app.htmx_src,
        year: Utc::now().year(),
    })
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
