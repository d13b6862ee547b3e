//! Major certification request report rows

use serde::Serialize;

use super::common::opt;
use super::ExportRow;
use crate::zendesk::{CertificationRequest, Ticket};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MajorCertRow {
    pub id: u64,
    pub subject: String,
    pub created_at: String,
    pub submitter: String,
    pub video_url: String,
}

impl MajorCertRow {
    pub fn new(ticket: &Ticket, request: CertificationRequest) -> Self {
        Self {
            id: ticket.id,
            subject: opt(&ticket.subject),
            created_at: opt(&ticket.created_at),
            submitter: request.submitter.unwrap_or_default(),
            video_url: request.video_url.unwrap_or_default(),
        }
    }
}

impl ExportRow for MajorCertRow {
    const HEADERS: &'static [&'static str] =
        &["id", "subject", "created_at", "submitter", "video_url"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.subject.clone(),
            self.created_at.clone(),
            self.submitter.clone(),
            self.video_url.clone(),
        ]
    }
}
