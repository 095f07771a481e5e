use serde::{Deserialize, Serialize};

/// A catalog record as persisted in the JSON store. `status` and
/// `thumbnails` get defaults so hand-edited files stay parseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    #[serde(default = "default_status")]
    pub status: bool,
    pub stock: i32,
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

fn default_status() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_thumbnails_default_when_absent() {
        let raw = r#"
        {
            "id": 1,
            "title": "Keyboard",
            "description": "Tenkeyless",
            "code": "KB-87",
            "price": 59.9,
            "stock": 12,
            "category": "peripherals"
        }"#;

        let product: Product = serde_json::from_str(raw).expect("deserialize");
        assert!(product.status);
        assert!(product.thumbnails.is_empty());
    }

    #[test]
    fn explicit_status_false_is_preserved() {
        let raw = r#"
        {
            "id": 2,
            "title": "Mouse",
            "description": "Wireless",
            "code": "MS-01",
            "price": 25.0,
            "status": false,
            "stock": 3,
            "category": "peripherals",
            "thumbnails": ["img/mouse.png"]
        }"#;

        let product: Product = serde_json::from_str(raw).expect("deserialize");
        assert!(!product.status);
        assert_eq!(product.thumbnails, vec!["img/mouse.png".to_string()]);
    }
}
