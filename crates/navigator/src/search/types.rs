use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Monthly premium in won.
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub max_coverage: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_new: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    #[serde(default)]
    pub category: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    #[serde(default)]
    pub product_id: String,
    pub rating: u8,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.products.len() + self.faqs.len() + self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
