use crate::schemas::{
    TestComplexInputSchema, TestComplexOutputSchema, TestInputSchema, TestNestedSchema,
    TestOutputSchema,
};
use transcript_rs_schema::{RegistryError, TypeRegistry};

/// Register every fixture schema into `registry`.
pub fn register_fixture_schemas(registry: &TypeRegistry) -> Result<(), RegistryError> {
    registry.register::<TestInputSchema>()?;
    registry.register::<TestOutputSchema>()?;
    registry.register::<TestNestedSchema>()?;
    registry.register::<TestComplexInputSchema>()?;
    registry.register::<TestComplexOutputSchema>()?;
    Ok(())
}

/// Fresh isolated registry holding the fixture schemas.
pub fn fixture_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();
    if let Err(err) = register_fixture_schemas(&registry) {
        panic!("fixture schemas failed to register: {err}");
    }
    registry
}

/// Register the fixture schemas into the process-wide registry.
pub fn register_global_fixtures() {
    if let Err(err) = register_fixture_schemas(TypeRegistry::global()) {
        panic!("fixture schemas failed to register globally: {err}");
    }
}
