use serde::{Deserialize, Serialize};

/// Challenge category with its display colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessCategory {
    /// Slug, e.g. `mental-health`
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

impl WellnessCategory {
    pub fn find_by_name<'a>(categories: &'a [WellnessCategory], name: &str) -> Option<&'a WellnessCategory> {
        categories.iter().find(|c| c.name == name)
    }

    /// Icon name for the category slug
    pub fn icon_name(&self) -> &'static str {
        match self.id.as_str() {
            "fitness" => "dumbbell",
            "mental-health" => "brain",
            "nutrition" => "apple",
            "sleep" => "moon",
            "wellness" => "heart",
            _ => "target",
        }
    }
}
