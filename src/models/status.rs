use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Live,
    Draft,
    Closed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Live, Status::Draft, Status::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Live => "LIVE",
            Status::Draft => "DRAFT",
            Status::Closed => "CLOSED",
        }
    }

    // Unknown labels coerce to LIVE rather than rejecting the request
    pub fn from_label(label: &str) -> Self {
        Status::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .unwrap_or(Status::Live)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Live
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
