//! Server-rendered marketing pages. Presentation is deliberately thin: a
//! shared layout helper and per-page body builders, no template engine.

use std::fmt::Write as _;

use axum::Json;
use axum::response::Html;

use atelier_db::models::SubmissionRow;
use atelier_types::api::SubmissionOutcome;
use atelier_types::models::{STUDIO_NAME, ServiceDescriptor};

/// The fixed services catalogue shown on /services and in the contact form.
pub const SERVICES: [ServiceDescriptor; 4] = [
    ServiceDescriptor {
        name: "3D Modeling & Visualization",
        desc: "Blender + CAD",
        icon: Some("cube"),
    },
    ServiceDescriptor {
        name: "Architectural CAD Design",
        desc: "Plans & Drawings",
        icon: Some("blueprint"),
    },
    ServiceDescriptor {
        name: "Quantity Surveying",
        desc: "BOQ & Cost Estimation",
        icon: None,
    },
    ServiceDescriptor {
        name: "Product Design",
        desc: "Industrial & Manufacturing",
        icon: Some("factory"),
    },
];

const STYLE: &str = "\
    body { font-family: sans-serif; margin: 0; color: #222; }\
    nav { background: #1d2a3a; padding: 1rem 2rem; }\
    nav a { color: #fff; margin-right: 1.5rem; text-decoration: none; }\
    main { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }\
    .flash.success { color: #1a7f37; }\
    .flash.warning { color: #9a6700; }\
    .flash.error { color: #cf222e; }\
    label { display: block; margin-top: 1rem; }\
    input, select, textarea { width: 100%; padding: 0.5rem; }\
    button { margin-top: 1rem; padding: 0.5rem 1.5rem; }\
    table { border-collapse: collapse; width: 100%; }\
    th, td { border: 1px solid #ccc; padding: 0.5rem; text-align: left; }";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - {STUDIO_NAME}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <nav>\n\
         <a href=\"/\">Home</a>\n\
         <a href=\"/about\">About</a>\n\
         <a href=\"/services\">Services</a>\n\
         <a href=\"/contact\">Contact</a>\n\
         </nav>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for user-submitted text rendered into pages.
pub(crate) fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub async fn home() -> Html<String> {
    let body = format!(
        "<h1>{STUDIO_NAME}</h1>\n\
         <p>Design engineering for architecture, manufacturing and construction.</p>\n\
         <p><a href=\"/contact\">Request a quote</a> or browse our <a href=\"/services\">services</a>.</p>\n"
    );
    Html(layout("Home", &body))
}

pub async fn about() -> Html<String> {
    let body = format!(
        "<h1>About us</h1>\n\
         <p>{STUDIO_NAME} is a small studio delivering 3D modeling, CAD drawings,\n\
         cost estimation and product design for clients worldwide.</p>\n"
    );
    Html(layout("About", &body))
}

pub async fn services() -> Html<String> {
    let mut body = String::from("<h1>Services</h1>\n<ul>\n");
    for service in &SERVICES {
        let _ = write!(body, "<li>");
        if let Some(icon) = service.icon {
            let _ = write!(body, "<span class=\"icon icon-{icon}\"></span> ");
        }
        let _ = writeln!(
            body,
            "<strong>{}</strong> - {}</li>",
            escape(service.name),
            escape(service.desc)
        );
    }
    body.push_str("</ul>\n");
    Html(layout("Services", &body))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub(crate) fn contact_html(flash: Option<SubmissionOutcome>) -> String {
    let mut body = String::new();

    if let Some(outcome) = flash {
        let _ = writeln!(
            body,
            "<p class=\"flash {}\">{}</p>",
            outcome.severity(),
            outcome.user_message()
        );
    }

    body.push_str(
        "<h1>Request a quote</h1>\n\
         <form method=\"post\" action=\"/contact\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <label>Email <input type=\"text\" name=\"email\"></label>\n\
         <label>Service <select name=\"service\">\n\
         <option value=\"\">Not sure yet</option>\n",
    );
    for service in &SERVICES {
        let _ = writeln!(
            body,
            "<option value=\"{name}\">{name}</option>",
            name = escape(service.name)
        );
    }
    body.push_str(
        "</select></label>\n\
         <label>Message <textarea name=\"message\" rows=\"6\"></textarea></label>\n\
         <button type=\"submit\">Send</button>\n\
         </form>\n",
    );

    layout("Contact", &body)
}

pub(crate) fn admin_html(rows: &[SubmissionRow], admin_secret: &str) -> String {
    let mut body = String::from(
        "<h1>Submissions</h1>\n\
         <table>\n\
         <tr><th>Id</th><th>Name</th><th>Email</th><th>Service</th><th>Message</th><th>Received</th><th></th></tr>\n",
    );

    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{service}</td><td>{message}</td><td>{created}</td>\
             <td><form method=\"post\" action=\"/admin/delete/{id}?password={secret}\"><button>Delete</button></form></td></tr>",
            id = row.id,
            name = escape(&row.name),
            email = escape(&row.email),
            service = escape(&row.service),
            message = escape(&row.message),
            created = escape(&row.created_at),
            secret = escape(admin_secret),
        );
    }

    body.push_str("</table>\n");
    layout("Admin", &body)
}
