// API payload schemas as returned by the nutrition analytics service
use serde::{Deserialize, Deserializer, Serialize};

/// Per-category macronutrient averages from `/nutritional-insights`.
/// The four sequences are parallel: index i describes the same category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NutritionalInsight {
    pub diet_types: Vec<String>,
    pub protein: Vec<f64>,
    pub carbs: Vec<f64>,
    pub fat: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScatterPoint {
    pub diet_type: String,
    pub protein: f64,
    pub carbs: f64,
}

#[cfg(test)]
impl ScatterPoint {
    pub fn new(diet_type: impl Into<String>, protein: f64, carbs: f64) -> Self {
        Self {
            diet_type: diet_type.into(),
            protein,
            carbs,
        }
    }
}

/// Envelope of `/scatter-data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScatterData {
    pub data: Vec<ScatterPoint>,
}

/// Square matrix of pairwise correlations from `/heatmap-data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub data: Vec<Vec<f64>>,
}

/// Category counts from `/pie-chart-data`. `total` is reported by the server
/// and is not guaranteed to equal the sum of `values`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Distribution {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub total: f64,
}

/// A macro amount as the server sent it. Only finite numbers count towards
/// averages; text is kept verbatim for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => match n.as_f64().filter(|v| v.is_finite()) {
                Some(v) => Amount::Number(v),
                None => Amount::Text(n.to_string()),
            },
            serde_json::Value::String(text) => Amount::Text(text),
            _ => Amount::Missing,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Recipe {
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub diet_type: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub protein: Amount,
    #[serde(default)]
    pub carbs: Amount,
    #[serde(default)]
    pub fat: Amount,
}

/// One page of `/recipes`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_recipes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_tolerates_missing_and_non_numeric_fields() {
        let json = r#"{
            "recipe_name": "Lentil Soup",
            "diet_type": "vegan",
            "protein": "n/a",
            "carbs": null,
            "fat": 4.5
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_name, "Lentil Soup");
        assert_eq!(recipe.cuisine_type, None);
        assert_eq!(recipe.protein, Amount::Text("n/a".to_string()));
        assert_eq!(recipe.protein.value(), None);
        assert_eq!(recipe.carbs, Amount::Missing);
        assert_eq!(recipe.fat.value(), Some(4.5));
    }

    #[test]
    fn test_numeric_text_is_kept_but_not_counted() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"recipe_name": "Oats", "protein": "12.5", "fat": {"g": 1}}"#)
                .unwrap();
        assert_eq!(recipe.protein, Amount::Text("12.5".to_string()));
        assert_eq!(recipe.protein.value(), None);
        assert_eq!(recipe.fat, Amount::Missing);

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["protein"], "12.5");
        assert!(json["carbs"].is_null());
    }

    #[test]
    fn test_recipe_page_decodes_server_shape() {
        let json = r#"{
            "recipes": [{"recipe_name": "Steak", "diet_type": "keto", "cuisine_type": "american",
                         "protein": 40, "carbs": 1.2, "fat": 22}],
            "page": 3,
            "total_pages": 12,
            "total_recipes": 240
        }"#;

        let page: RecipePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 12);
        assert_eq!(page.total_recipes, Some(240));
        assert_eq!(page.recipes[0].protein, Amount::Number(40.0));
    }

    #[test]
    fn test_scatter_envelope_decodes() {
        let json = r#"{"data": [{"diet_type": "paleo", "protein": 30.1, "carbs": 12.0}]}"#;
        let scatter: ScatterData = serde_json::from_str(json).unwrap();
        assert_eq!(scatter.data, vec![ScatterPoint::new("paleo", 30.1, 12.0)]);
    }
}
