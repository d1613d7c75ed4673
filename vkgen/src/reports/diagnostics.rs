use vkgen_codegen::pipeline::Diagnostic;

use super::output::Output;

/// Render every diagnostic as `severity[phase]: message`.
pub(super) fn render(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    for diag in diagnostics {
        out.diagnostic(
            &format!("{}[{}]", diag.severity, diag.phase),
            &diag.message,
            diag.location.as_deref(),
        );
    }
}
