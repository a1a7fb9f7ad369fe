/// Brand name rendered in page titles and mail signatures.
pub const STUDIO_NAME: &str = "Atelier Design Studio";

/// Sentinel stored when the submitter left the service field blank.
pub const SERVICE_NOT_SPECIFIED: &str = "Not Specified";

/// One entry of the fixed services catalogue shown on the services page.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub desc: &'static str,
    pub icon: Option<&'static str>,
}
