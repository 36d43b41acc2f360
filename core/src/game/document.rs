use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Passport,
    Visa,
    Permit,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Passport => "Passport",
            DocumentKind::Visa => "Visa",
            DocumentKind::Permit => "Permit",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A travel document issued by one country, shown as `"<country> <kind>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    pub country: String,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(kind: DocumentKind, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            kind,
        }
    }

    pub fn is(&self, kind: DocumentKind, country: &str) -> bool {
        self.kind == kind && self.country == country
    }

    /// Compares against a typed item name such as `"kebabistan visa"`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.to_string().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.country, self.kind)
    }
}
