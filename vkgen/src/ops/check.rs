//! Check operation - pipeline run without generation.

use eyre::{Context, Result};
use vkgen_codegen::pipeline::Pipeline;
use vkgen_schema::Schema;

use super::summarize;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs every pipeline phase and returns the diagnostics.
pub fn check(schema: Schema) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(schema)
        .wrap_err("Validation failed")?;

    Ok(CheckReport {
        summary: summarize(&ctx)?,
        diagnostics: ctx.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vkgen_codegen::testing::{sample_schema, schema};

    use super::*;

    #[test]
    fn test_sample_schema_is_valid() {
        let report = check(sample_schema()).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.summary.enums, 4);
    }

    #[test]
    fn test_inheritance_cycle_fails_check() {
        let report = check(schema(json!({
            "objects": {
                "a_a": {"allOf": [{"$ref": "#/definitions/a_b"}]},
                "a_b": {"allOf": [{"$ref": "#/definitions/a_a"}]}
            }
        })))
        .unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.summary.classes, 0);
    }
}
