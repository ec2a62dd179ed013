//! Code builder for generating properly indented TypeScript.

/// Two-space indentation, the convention for all emitted TypeScript.
const INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use mirrorgen_emit::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("export interface Foo {")
///     .indent()
///     .line("id: string;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export interface Foo {\n  id: string;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add pre-rendered text verbatim, one line at a time, at current
    /// indentation.
    pub fn lines(mut self, text: &str) -> Self {
        for line in text.lines() {
            self = self.line(line);
        }
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc block: `/** text */` for a single line, a starred block
    /// for multiple lines.
    pub fn jsdoc(mut self, text: &str) -> Self {
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default();
        match lines.next() {
            None => {
                self.write_indent();
                self.buffer.push_str("/** ");
                self.buffer.push_str(first);
                self.buffer.push_str(" */\n");
                self
            }
            Some(second) => {
                self = self.line("/**");
                self = self.line(&format!(" * {first}"));
                self = self.line(&format!(" * {second}"));
                for line in lines {
                    self = self.line(&format!(" * {line}"));
                }
                self.line(" */")
            }
        }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

/// Re-indent a multi-line expression to the given indent level: the first
/// line is left alone (it follows `name: ` on the same line), continuation
/// lines are stripped of their common leading whitespace and re-indented.
pub(crate) fn reindent(expression: &str, level: usize) -> String {
    if !expression.contains('\n') {
        return expression.to_string();
    }

    let continuation: Vec<&str> = expression.lines().skip(1).collect();
    let common = continuation
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut result = expression
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();
    for line in continuation {
        result.push('\n');
        if line.trim().is_empty() {
            continue;
        }
        result.push_str(&INDENT.repeat(level));
        result.push_str(&line[common..]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::new().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::new()
            .line("export const params = z.object({")
            .indent()
            .line("email: z.string(),")
            .dedent()
            .line("});")
            .build();

        assert_eq!(
            code,
            "export const params = z.object({\n  email: z.string(),\n});\n"
        );
    }

    #[test]
    fn test_jsdoc_single_line() {
        let code = CodeBuilder::new().jsdoc("The id.").build();
        assert_eq!(code, "/** The id. */\n");
    }

    #[test]
    fn test_jsdoc_multi_line() {
        let code = CodeBuilder::new().jsdoc("Line one.\nLine two.").build();
        assert_eq!(code, "/**\n * Line one.\n * Line two.\n */\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::new()
            .each(["a", "b"], |b, item| b.line(&format!("{item};")))
            .build();
        assert_eq!(code, "a;\nb;\n");
    }

    #[test]
    fn test_reindent_single_line_unchanged() {
        assert_eq!(reindent("z.string()", 1), "z.string()");
    }

    #[test]
    fn test_reindent_multiline() {
        let expr = "z.object({\n    a: z.string(),\n  })";
        assert_eq!(reindent(expr, 1), "z.object({\n    a: z.string(),\n  })");
    }
}
