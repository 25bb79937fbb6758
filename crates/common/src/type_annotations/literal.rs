//! Enumerated string values

/// `Literal["A", "B", ...]` with values kept in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub values: Vec<String>,
}

impl TypeLiteral {
    pub fn new<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    pub fn render(&self) -> String {
        let values: Vec<String> = self
            .values
            .iter()
            .map(|value| format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")))
            .collect();
        format!("Literal[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_order() {
        let literal = TypeLiteral::new(&["b", "a"]);
        assert_eq!(literal.render(), "Literal[\"b\", \"a\"]");
    }

    #[test]
    fn test_render_escapes_quotes() {
        let literal = TypeLiteral::new(&["say \"hi\""]);
        assert_eq!(literal.render(), "Literal[\"say \\\"hi\\\"\"]");
    }
}
