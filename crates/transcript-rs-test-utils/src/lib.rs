//! Test helpers shared across Transcript crates.

pub mod registry;
pub mod schemas;

pub use registry::{fixture_registry, register_fixture_schemas, register_global_fixtures};
pub use schemas::{
    FIXTURE_NAMESPACE, TestComplexInputSchema, TestComplexOutputSchema, TestInputSchema,
    TestNestedSchema, TestOutputSchema, complex_input, complex_output,
};
