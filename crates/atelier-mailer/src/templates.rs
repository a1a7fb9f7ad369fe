//! Plain-text bodies for the two outbound mails.

use chrono::Local;

use atelier_types::models::STUDIO_NAME;

pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting Atelier Design Studio";

pub fn admin_subject(name: &str) -> String {
    format!("New design quote request - {name}")
}

pub fn admin_body(name: &str, email: &str, service: &str, message: &str) -> String {
    format!(
        "New design request\n\
         \n\
         Name    : {name}\n\
         Email   : {email}\n\
         Service : {service}\n\
         Time    : {time}\n\
         \n\
         Message:\n\
         {message}\n",
        time = Local::now().format("%Y-%m-%d %H:%M:%S"),
    )
}

pub fn confirmation_body(name: &str, service: &str) -> String {
    format!(
        "Hello {name},\n\
         \n\
         Thank you for contacting {STUDIO_NAME}.\n\
         \n\
         Requested service:\n\
         {service}\n\
         \n\
         Our team will contact you within 24 hours.\n\
         \n\
         Regards,\n\
         {STUDIO_NAME}\n",
    )
}
