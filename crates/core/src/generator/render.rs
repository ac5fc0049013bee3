use crate::types::StubFragment;

/// Wraps a stub body into a complete interface source file.
pub fn render_interface(
    license: &str,
    pragma: Option<&str>,
    contract: &str,
    fragment: &StubFragment,
    extra_imports: &[String],
) -> String {
    let mut header = format!("// SPDX-License-Identifier: {license}");
    if let Some(pragma) = pragma {
        header.push('\n');
        header.push_str(pragma);
    }

    let mut imports: Vec<String> = extra_imports.to_vec();
    imports.extend(fragment.imports.iter().map(|path| format!("import \"{path}\";")));
    imports.extend(fragment.symbol_imports.iter().map(|import| import.to_solidity()));

    let mut sections = vec![header];
    if !imports.is_empty() {
        sections.push(imports.join("\n"));
    }
    sections.push(format!("interface I{contract} {{\n{}\n}}", fragment.body));

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}
