use crate::error::Result;
use crate::utils::constants::LOCATION_FIELD;
use serde_json::Value;

/// GeoJSON boundary document, passed to the renderer untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCollection {
    document: Value,
}

impl BoundaryCollection {
    pub fn parse(text: &str) -> Result<Self> {
        let document = serde_json::from_str(text)?;
        Ok(Self { document })
    }

    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    pub fn feature_count(&self) -> usize {
        self.features().len()
    }

    /// Location keys of every feature that carries one, in document order.
    ///
    /// Numeric keys are rendered as text so they compare against table keys.
    pub fn feature_keys(&self) -> Vec<String> {
        self.features()
            .iter()
            .filter_map(|feature| feature.get("properties")?.get(LOCATION_FIELD))
            .filter_map(|key| match key {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }

    fn features(&self) -> &[Value] {
        self.document
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> BoundaryCollection {
        BoundaryCollection::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"hydrologic_unit": "150400"}, "geometry": null},
                {"type": "Feature", "properties": {"hydrologic_unit": 150601}, "geometry": null},
                {"type": "Feature", "properties": {"name": "unkeyed"}, "geometry": null}
            ]
        }))
    }

    #[test]
    fn test_feature_keys() {
        let boundaries = sample();
        assert_eq!(boundaries.feature_count(), 3);
        assert_eq!(boundaries.feature_keys(), vec!["150400", "150601"]);
    }

    #[test]
    fn test_document_without_features() -> Result<()> {
        let boundaries = BoundaryCollection::parse(r#"{"type": "Topology"}"#)?;
        assert_eq!(boundaries.feature_count(), 0);
        assert!(boundaries.feature_keys().is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(BoundaryCollection::parse("{not json").is_err());
    }
}
