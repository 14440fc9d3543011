use crate::model::eq_ignore_case;

#[derive(Debug, Clone, PartialEq)]
pub struct MakeEntry {
    pub name: String,
    pub models: Vec<String>,
}

impl MakeEntry {
    pub fn new(name: &str, models: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| eq_ignore_case(m, model))
    }
}

/// Static inventory of orderable makes, models and colors.
///
/// Makes and colors keep the order they were declared in, which is the order
/// the lookup endpoints return them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    makes: Vec<MakeEntry>,
    colors: Vec<String>,
}

impl Catalog {
    pub fn new(makes: Vec<MakeEntry>, colors: Vec<String>) -> Self {
        Self { makes, colors }
    }

    pub fn make(&self, make: &str) -> Option<&MakeEntry> {
        self.makes.iter().find(|entry| eq_ignore_case(&entry.name, make))
    }

    pub fn makes(&self) -> Vec<String> {
        self.makes.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn models_for(&self, make: &str) -> Option<Vec<String>> {
        self.make(make).map(|entry| entry.models.clone())
    }

    pub fn colors(&self) -> Vec<String> {
        self.colors.clone()
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| eq_ignore_case(c, color))
    }

    /// True iff the make exists, the model belongs to it, and the color is offered.
    pub fn is_available(&self, make: &str, model: &str, color: &str) -> bool {
        self.make(make)
            .map(|entry| entry.has_model(model))
            .unwrap_or(false)
            && self.has_color(color)
    }
}
