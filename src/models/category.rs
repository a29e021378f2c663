//! Category correction types

use mongodb::bson::{doc, Document};

/// A rename of one `category` value to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCorrection {
    pub from: String,
    pub to: String,
}

impl CategoryCorrection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn filter(&self) -> Document {
        doc! { "category": self.from.as_str() }
    }

    pub fn update(&self) -> Document {
        doc! { "$set": { "category": self.to.as_str() } }
    }
}

/// Outcome of a bulk update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkUpdate {
    pub matched: u64,
    pub modified: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_documents() {
        let correction = CategoryCorrection::new("Smsrt kartica", "Smart kartica");

        assert_eq!(correction.filter(), doc! { "category": "Smsrt kartica" });
        assert_eq!(
            correction.update(),
            doc! { "$set": { "category": "Smart kartica" } }
        );
    }
}
