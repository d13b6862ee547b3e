//! Group export rows

use serde::Serialize;

use super::common::opt;
use super::ExportRow;
use crate::zendesk::Group;

#[derive(Serialize, Debug, Clone)]
pub struct GroupRow {
    pub group_id: u64,
    pub name: String,
    pub description: String,
    pub is_public: String,
    pub default: String,
    pub deleted: String,
}

impl From<&Group> for GroupRow {
    fn from(group: &Group) -> Self {
        Self {
            group_id: group.id,
            name: opt(&group.name),
            description: opt(&group.description),
            is_public: opt(&group.is_public),
            default: opt(&group.default),
            deleted: opt(&group.deleted),
        }
    }
}

impl ExportRow for GroupRow {
    const HEADERS: &'static [&'static str] = &[
        "group_id",
        "name",
        "description",
        "is_public",
        "default",
        "deleted",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.group_id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.is_public.clone(),
            self.default.clone(),
            self.deleted.clone(),
        ]
    }
}
