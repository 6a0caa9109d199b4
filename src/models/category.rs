use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[sqlx(rename = "Business Idea")]
    #[serde(rename = "Business Idea")]
    BusinessIdea,
    Patent,
    #[sqlx(rename = "Equity/Shares")]
    #[serde(rename = "Equity/Shares")]
    EquityShares,
    #[sqlx(rename = "Side Hustle")]
    #[serde(rename = "Side Hustle")]
    SideHustle,
    #[sqlx(rename = "Digital Asset")]
    #[serde(rename = "Digital Asset")]
    DigitalAsset,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::BusinessIdea,
        Category::Patent,
        Category::EquityShares,
        Category::SideHustle,
        Category::DigitalAsset,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BusinessIdea => "Business Idea",
            Category::Patent => "Patent",
            Category::EquityShares => "Equity/Shares",
            Category::SideHustle => "Side Hustle",
            Category::DigitalAsset => "Digital Asset",
            Category::Other => "Other",
        }
    }

    // Unknown labels coerce to Other rather than rejecting the request
    pub fn from_label(label: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .unwrap_or(Category::Other)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
