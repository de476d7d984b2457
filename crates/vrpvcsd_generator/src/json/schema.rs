use schemars::schema_for;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(Vec<types::JsonInstance>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_collection_keys() {
        let schema = generate_json_schema().unwrap();

        assert!(schema.contains("\"Vehicles\""));
        assert!(schema.contains("\"Customers\""));
        assert!(schema.contains("\"real_n\""));
    }
}
