//! Text listing of registered generator types.

use datagen_core::ParameterInfo;
use datagen_factory::FactoryDescriptor;

/// Render descriptors as an indented, human-readable listing.
pub fn format_descriptors(descriptors: &[FactoryDescriptor]) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        out.push_str(&descriptor.type_name);
        out.push('\n');
        if descriptor.parameters.is_empty() {
            out.push_str("  (no parameters)\n");
        }
        for param in &descriptor.parameters {
            out.push_str(&format_parameter(param));
            out.push('\n');
        }
    }
    out
}

fn format_parameter(param: &ParameterInfo) -> String {
    let flag = if param.required { "required" } else { "optional" };
    let line = format!("  {:<10} {:<8} {}", param.name, param.value_type, flag);
    if param.help.is_empty() {
        line
    } else {
        format!("{line}  {}", param.help)
    }
}
