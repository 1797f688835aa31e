//! Fixture schema types covering flat, nested and keyed payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use transcript_rs_schema::Schema;

/// Namespace shared by every fixture type.
pub const FIXTURE_NAMESPACE: &str = "tests.lib.components.test_agent_memory";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestInputSchema {
    pub test_field: String,
}

impl TestInputSchema {
    pub fn new(test_field: impl Into<String>) -> Self {
        Self {
            test_field: test_field.into(),
        }
    }
}

impl Schema for TestInputSchema {
    const QUALIFIED_NAME: &'static str = "tests.lib.components.test_agent_memory.TestInputSchema";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutputSchema {
    pub test_field: String,
}

impl TestOutputSchema {
    pub fn new(test_field: impl Into<String>) -> Self {
        Self {
            test_field: test_field.into(),
        }
    }
}

impl Schema for TestOutputSchema {
    const QUALIFIED_NAME: &'static str = "tests.lib.components.test_agent_memory.TestOutputSchema";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestNestedSchema {
    pub nested_field: String,
    pub nested_int: i64,
}

impl TestNestedSchema {
    pub fn new(nested_field: impl Into<String>, nested_int: i64) -> Self {
        Self {
            nested_field: nested_field.into(),
            nested_int,
        }
    }
}

impl Schema for TestNestedSchema {
    const QUALIFIED_NAME: &'static str = "tests.lib.components.test_agent_memory.TestNestedSchema";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestComplexInputSchema {
    pub text_field: String,
    pub number_field: f64,
    pub list_field: Vec<String>,
    pub nested_field: TestNestedSchema,
}

impl Schema for TestComplexInputSchema {
    const QUALIFIED_NAME: &'static str =
        "tests.lib.components.test_agent_memory.TestComplexInputSchema";

    fn validate(&self) -> Result<(), String> {
        if !self.number_field.is_finite() {
            return Err("number_field must be finite".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestComplexOutputSchema {
    pub response_text: String,
    pub calculated_value: i64,
    pub data_dict: BTreeMap<String, TestNestedSchema>,
}

impl Schema for TestComplexOutputSchema {
    const QUALIFIED_NAME: &'static str =
        "tests.lib.components.test_agent_memory.TestComplexOutputSchema";
}

/// Complex input with a single nested record.
pub fn complex_input(text: &str, nested_int: i64) -> TestComplexInputSchema {
    TestComplexInputSchema {
        text_field: text.to_string(),
        number_field: 2.5,
        list_field: vec!["item1".to_string(), "item2".to_string()],
        nested_field: TestNestedSchema::new("Nested", nested_int),
    }
}

/// Complex output keyed by the given entries.
pub fn complex_output(text: &str, entries: &[(&str, &str, i64)]) -> TestComplexOutputSchema {
    TestComplexOutputSchema {
        response_text: text.to_string(),
        calculated_value: 100,
        data_dict: entries
            .iter()
            .map(|(key, field, value)| (key.to_string(), TestNestedSchema::new(*field, *value)))
            .collect(),
    }
}
