use crate::core::types::LevelPrefix;

/// One `const uint8_t levelN[...] = { ... };` table found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Everything between `{` and the first `};`, untouched.
    pub body: String,
    /// 1-based line of the `const` keyword.
    pub line: usize,
}

/// Finds every level table in `source`, in order of appearance.
///
/// The accepted shape is
/// `const <ws> uint8_t <ws> <prefix><digits> <ws?> [ <no ']'> ] <ws?> = <ws?> { <body> };`
/// where the body runs to the first `};`. Anything else is skipped.
pub fn locate_declarations(source: &str, prefix: &LevelPrefix) -> Vec<Declaration> {
    let mut found = Vec::new();
    let mut from = 0;

    while let Some(offset) = source[from..].find(KEYWORD) {
        let start = from + offset;
        let mut cursor = Cursor { src: source, pos: start };
        match cursor.declaration(prefix.as_str()) {
            Some((name, body)) => {
                found.push(Declaration {
                    name: name.to_string(),
                    body: body.to_string(),
                    line: line_of(source, start),
                });
                from = cursor.pos;
            }
            None => from = start + KEYWORD.len(),
        }
    }

    found
}

const KEYWORD: &str = "const";
const ELEMENT_TYPE: &str = "uint8_t";
const BODY_END: &str = "};";

fn line_of(source: &str, pos: usize) -> usize {
    source[..pos].bytes().filter(|b| *b == b'\n').count() + 1
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        skipped
    }

    fn eat_digits(&mut self) -> usize {
        let count = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.pos += count;
        count
    }

    /// Moves past the next `pattern` and returns what came before it.
    fn take_until(&mut self, pattern: &str) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(pattern)?;
        self.pos += idx + pattern.len();
        Some(&rest[..idx])
    }

    fn declaration(&mut self, prefix: &str) -> Option<(&'a str, &'a str)> {
        if !self.eat(KEYWORD) || self.skip_whitespace() == 0 {
            return None;
        }
        if !self.eat(ELEMENT_TYPE) || self.skip_whitespace() == 0 {
            return None;
        }

        let name_start = self.pos;
        if !self.eat(prefix) || self.eat_digits() == 0 {
            return None;
        }
        let name = &self.src[name_start..self.pos];

        self.skip_whitespace();
        if !self.eat("[") {
            return None;
        }
        self.take_until("]")?;
        self.skip_whitespace();
        if !self.eat("=") {
            return None;
        }
        self.skip_whitespace();
        if !self.eat("{") {
            return None;
        }
        let body = self.take_until(BODY_END)?;

        Some((name, body))
    }
}
