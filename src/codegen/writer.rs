/// Indentation-aware source buffer used by the emitters

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    indent: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write every line of a multi-line snippet at the current indentation
    pub fn lines(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    pub fn blank(&mut self) {
        // Never stack blank lines
        if !self.buf.is_empty() && !self.buf.ends_with("\n\n") {
            self.buf.push('\n');
        }
    }

    /// Write `///` doc lines for an optional description
    pub fn doc(&mut self, text: Option<&str>) {
        if let Some(text) = text {
            for line in text.trim().lines() {
                let line = line.trim_end();
                if line.is_empty() {
                    self.line("///");
                } else {
                    self.line(format!("/// {}", line));
                }
            }
        }
    }

    /// Write `open`, the body one level deeper, then `close`
    pub fn block(&mut self, open: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) {
        self.line(open);
        self.indent += 1;
        body(self);
        self.indent -= 1;
        self.line(close);
    }

    pub fn finish(self) -> String {
        let mut buf = self.buf;
        while buf.ends_with("\n\n") {
            buf.pop();
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_indentation() {
        let mut w = CodeWriter::new();
        w.block("pub struct Product {", "}", |w| {
            w.line("pub id: Option<String>,");
        });

        assert_eq!(w.finish(), "pub struct Product {\n    pub id: Option<String>,\n}\n");
    }

    #[test]
    fn test_doc_lines() {
        let mut w = CodeWriter::new();
        w.doc(Some("A product.\n\nSold by the store."));
        w.doc(None);

        assert_eq!(w.finish(), "/// A product.\n///\n/// Sold by the store.\n");
    }

    #[test]
    fn test_blank_lines_do_not_stack() {
        let mut w = CodeWriter::new();
        w.line("use serde::Serialize;");
        w.blank();
        w.blank();
        w.line("pub struct A;");

        assert_eq!(w.finish(), "use serde::Serialize;\n\npub struct A;\n");
    }
}
