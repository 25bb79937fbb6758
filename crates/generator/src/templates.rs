//! Template loading and management

use sdk_stubgen_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Template names and sources, in registration order
///
/// `macros.pyi` goes first so the other templates can import it.
const TEMPLATES: &[(&str, &str)] = &[
    ("macros.pyi", include_str!("../templates/macros.pyi.tera")),
    ("__init__.pyi", include_str!("../templates/__init__.pyi.tera")),
    ("client.pyi", include_str!("../templates/client.pyi.tera")),
    ("paginator.pyi", include_str!("../templates/paginator.pyi.tera")),
    ("waiter.pyi", include_str!("../templates/waiter.pyi.tera")),
    (
        "service_resource.pyi",
        include_str!("../templates/service_resource.pyi.tera"),
    ),
    ("type_defs.pyi", include_str!("../templates/type_defs.pyi.tera")),
    ("helpers.py", include_str!("../templates/helpers.py.tera")),
];

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("py_docstring", py_docstring_filter);
    tera.register_filter("indent_lines", indent_lines_filter);

    tera.add_raw_templates(TEMPLATES.iter().copied())
        .map_err(|e| GeneratorError::Generation(format!("Failed to load templates: {}", e)))?;

    Ok(tera)
}

fn width_arg(args: &HashMap<String, Value>) -> tera::Result<usize> {
    match args.get("width") {
        Some(value) => value
            .as_u64()
            .map(|width| width as usize)
            .ok_or_else(|| tera::Error::msg("width must be a non-negative integer")),
        None => Ok(4),
    }
}

/// Indent every non-empty line by `width` spaces (default 4)
fn indent_lines_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("indent_lines filter expects a string"))?;
    let padding = " ".repeat(width_arg(args)?);

    let indented: Vec<String> = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", padding, line)
            }
        })
        .collect();

    Ok(Value::String(indented.join("\n")))
}

/// Render text as an indented triple-quoted docstring
///
/// Empty text renders as an empty string so templates can skip it.
fn py_docstring_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("py_docstring filter expects a string"))?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(Value::String(String::new()));
    }

    let padding = " ".repeat(width_arg(args)?);
    let escaped = text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"");
    let mut lines = vec![format!("{}\"\"\"", padding)];
    for line in escaped.lines() {
        if line.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{}", padding, line.trim_end()));
        }
    }
    lines.push(format!("{}\"\"\"", padding));

    Ok(Value::String(lines.join("\n")))
}
