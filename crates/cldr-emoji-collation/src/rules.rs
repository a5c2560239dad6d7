//! Parser for the ICU tailoring syntax used by CLDR ordering data.
//!
//! Supported: resets (`&x`, `&[before n]x`, `&[last primary ignorable]` and
//! the other special positions in [`Boundary`]), the relations `<` `<<` `<<<`
//! `<<<<` `=` and their starred list forms, `'quoted'` text, and the `\u`,
//! `\U` and `\x{…}` escapes. The bracketed settings `normalization`,
//! `optimize` and `suppressContractions` are skipped; any other setting is an
//! error. Whitespace outside quotes is insignificant.

use tracing::debug;

use crate::error::CollationError;

/// Settings that leave the resulting order unchanged.
const INERT_SETTINGS: &[&str] = &["normalization", "optimize", "suppressContractions"];

/// Level at which a relation differs from its predecessor.
///
/// Declared strongest first, so `a < b` means `a` is the stronger difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Primary,
    Secondary,
    Tertiary,
    Identical,
}

/// Special reset positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    FirstPrimaryIgnorable,
    LastPrimaryIgnorable,
    FirstVariable,
    LastVariable,
    FirstRegular,
    LastRegular,
}

impl Boundary {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "first primary ignorable" => Some(Boundary::FirstPrimaryIgnorable),
            "last primary ignorable" => Some(Boundary::LastPrimaryIgnorable),
            "first variable" => Some(Boundary::FirstVariable),
            "last variable" => Some(Boundary::LastVariable),
            "first regular" => Some(Boundary::FirstRegular),
            "last regular" => Some(Boundary::LastRegular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reset {
    Text(String),
    /// `&[before n]text`: the next relation lands just before `text`.
    Before(Strength, String),
    Boundary(Boundary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Reset(Reset),
    Relation { strength: Strength, text: String },
}

/// Parse a rule string into resets and relations.
///
/// Starred relations are expanded into one relation per character. Error
/// positions are character offsets into `rules`.
pub fn parse_rules(rules: &str) -> Result<Vec<Rule>, CollationError> {
    Parser {
        chars: rules.chars().collect(),
        pos: 0,
    }
    .parse()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn parse(mut self) -> Result<Vec<Rule>, CollationError> {
        let mut rules = Vec::new();
        let mut seen_reset = false;

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                break;
            };
            match c {
                '&' => {
                    self.pos += 1;
                    rules.push(Rule::Reset(self.parse_reset()?));
                    seen_reset = true;
                }
                '<' | '=' => {
                    if !seen_reset {
                        return Err(self.error("relation before the first reset"));
                    }
                    let (strength, starred) = self.parse_operator();
                    if starred {
                        for text in self.parse_starred()? {
                            rules.push(Rule::Relation { strength, text });
                        }
                    } else {
                        let text = self.parse_text()?;
                        rules.push(Rule::Relation { strength, text });
                    }
                }
                '[' => {
                    let start = self.pos;
                    let setting = self.parse_bracket()?;
                    let name = setting.split_whitespace().next().unwrap_or_default();
                    if !INERT_SETTINGS.contains(&name) {
                        return Err(error_at(start, format!("unsupported setting [{setting}]")));
                    }
                    debug!(%setting, "skipping collation setting");
                }
                other => return Err(self.error(format!("unexpected '{other}'"))),
            }
        }

        Ok(rules)
    }

    fn parse_reset(&mut self) -> Result<Reset, CollationError> {
        self.skip_whitespace();
        if self.peek() != Some('[') {
            return Ok(Reset::Text(self.parse_text()?));
        }

        let start = self.pos;
        let position = self.parse_bracket()?;
        if let Some(level) = position.strip_prefix("before ") {
            let strength = match level.trim() {
                "1" => Strength::Primary,
                "2" => Strength::Secondary,
                "3" => Strength::Tertiary,
                other => return Err(error_at(start, format!("unknown level in [before {other}]"))),
            };
            self.skip_whitespace();
            if self.peek() == Some('[') {
                return Err(self.error("[before n] on a special reset position is not supported"));
            }
            return Ok(Reset::Before(strength, self.parse_text()?));
        }

        Boundary::from_name(&position)
            .map(Reset::Boundary)
            .ok_or_else(|| error_at(start, format!("unknown reset position [{position}]")))
    }

    fn parse_operator(&mut self) -> (Strength, bool) {
        let strength = if self.peek() == Some('=') {
            self.pos += 1;
            Strength::Identical
        } else {
            let mut level = 0;
            while level < 4 && self.peek() == Some('<') {
                self.pos += 1;
                level += 1;
            }
            match level {
                1 => Strength::Primary,
                2 => Strength::Secondary,
                // quaternary differences collapse into tertiary
                _ => Strength::Tertiary,
            }
        };

        let starred = self.peek() == Some('*');
        if starred {
            self.pos += 1;
        }
        (strength, starred)
    }

    fn parse_text(&mut self) -> Result<String, CollationError> {
        let start = self.pos;
        let text: String = self.read_atoms()?.into_iter().map(|(c, _)| c).collect();
        if text.is_empty() {
            return Err(error_at(start, "expected text"));
        }
        Ok(text)
    }

    /// Characters of a starred list; an unquoted `-` between two characters
    /// is an inclusive range.
    fn parse_starred(&mut self) -> Result<Vec<String>, CollationError> {
        let start = self.pos;
        let atoms = self.read_atoms()?;

        let mut items = Vec::new();
        let mut i = 0;
        while i < atoms.len() {
            let (first, _) = atoms[i];
            if i + 2 < atoms.len() && atoms[i + 1] == ('-', false) {
                let (last, _) = atoms[i + 2];
                if last < first {
                    return Err(error_at(start, format!("descending range {first}-{last}")));
                }
                items.extend((first..=last).map(String::from));
                i += 3;
            } else {
                items.push(first.to_string());
                i += 1;
            }
        }

        if items.is_empty() {
            return Err(error_at(start, "expected characters after '*'"));
        }
        Ok(items)
    }

    /// Read text up to the next syntax character. The flag marks characters
    /// that were quoted or escaped.
    fn read_atoms(&mut self) -> Result<Vec<(char, bool)>, CollationError> {
        let mut atoms = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                break;
            };
            match c {
                '&' | '<' | '=' | '[' => break,
                '|' => return Err(self.error("context prefixes are not supported")),
                '/' => return Err(self.error("expansions are not supported")),
                '\'' => self.read_quoted(&mut atoms)?,
                '\\' => {
                    let escaped = self.parse_escape()?;
                    atoms.push((escaped, true));
                }
                _ => {
                    self.pos += 1;
                    atoms.push((c, false));
                }
            }
        }
        Ok(atoms)
    }

    fn read_quoted(&mut self, atoms: &mut Vec<(char, bool)>) -> Result<(), CollationError> {
        let start = self.pos;
        self.pos += 1;
        if self.peek() == Some('\'') {
            self.pos += 1;
            atoms.push(('\'', true));
            return Ok(());
        }

        loop {
            match self.peek() {
                None => return Err(error_at(start, "unterminated quote")),
                Some('\'') => {
                    self.pos += 1;
                    if self.peek() != Some('\'') {
                        return Ok(());
                    }
                    self.pos += 1;
                    atoms.push(('\'', true));
                }
                Some(c) => {
                    self.pos += 1;
                    atoms.push((c, true));
                }
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, CollationError> {
        let start = self.pos;
        self.pos += 1;
        let Some(kind) = self.peek() else {
            return Err(error_at(start, "dangling backslash"));
        };
        self.pos += 1;

        let value = match kind {
            'u' => self.take_hex(4, start)?,
            'U' => self.take_hex(8, start)?,
            'x' if self.peek() == Some('{') => {
                self.pos += 1;
                let digits: String = self.chars[self.pos..]
                    .iter()
                    .take_while(|c| **c != '}')
                    .collect();
                self.pos += digits.chars().count();
                if self.peek() != Some('}') {
                    return Err(error_at(start, "unterminated \\x{ escape"));
                }
                self.pos += 1;
                u32::from_str_radix(&digits, 16)
                    .map_err(|_| error_at(start, "invalid \\x{ escape"))?
            }
            'x' => self.take_hex(2, start)?,
            literal => return Ok(literal),
        };

        char::from_u32(value)
            .ok_or_else(|| error_at(start, format!("U+{value:X} is not a scalar value")))
    }

    fn take_hex(&mut self, len: usize, start: usize) -> Result<u32, CollationError> {
        let end = self.pos + len;
        let digits: String = self.chars.get(self.pos..end).unwrap_or_default().iter().collect();
        if digits.chars().count() != len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error_at(start, format!("expected {len} hex digits")));
        }
        self.pos = end;
        u32::from_str_radix(&digits, 16).map_err(|_| error_at(start, "invalid hex escape"))
    }

    /// Consume a bracketed block, nested brackets included, and return its
    /// content with whitespace runs collapsed.
    fn parse_bracket(&mut self) -> Result<String, CollationError> {
        let start = self.pos;
        self.pos += 1;
        let mut depth = 1;
        let mut content = String::new();

        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(content.split_whitespace().collect::<Vec<_>>().join(" "));
                    }
                }
                _ => {}
            }
            content.push(c);
        }

        Err(error_at(start, "unterminated '['"))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn error(&self, message: impl Into<String>) -> CollationError {
        error_at(self.pos, message)
    }
}

fn error_at(position: usize, message: impl Into<String>) -> CollationError {
    CollationError::Rules {
        position,
        message: message.into(),
    }
}
