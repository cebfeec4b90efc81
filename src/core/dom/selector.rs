//! CSS selector subset: `tag`, `*`, `#id`, `.class`, `[attr]`, `[attr="v"]`,
//! compounds of these, descendant combinators and comma lists.
//!
//! An unparsable selector matches nothing.

use crate::domain::model::NodeId;
use crate::domain::ports::DomHost;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn matches<D: DomHost + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            match dom.tag(node) {
                Some(actual) if actual.eq_ignore_ascii_case(tag) => {}
                _ => return false,
            }
        }
        if let Some(id) = &self.id {
            if dom.attribute(node, "id").as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| dom.has_class(node, c)) {
            return false;
        }
        self.attributes.iter().all(|(name, expected)| {
            match (dom.attribute(node, name), expected) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => &actual == expected,
                (None, _) => false,
            }
        })
    }
}

/// Compounds joined by descendant combinators, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex(Vec<Compound>);

impl Complex {
    fn matches<D: DomHost + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.0.split_last() else {
            return false;
        };
        if !last.matches(dom, node) {
            return false;
        }

        // 只有後代組合子，由右往左貪婪比對祖先即可
        let mut cursor = dom.parent(node);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(ancestor) = cursor else {
                    return false;
                };
                cursor = dom.parent(ancestor);
                if compound.matches(dom, ancestor) {
                    break;
                }
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<Complex>);

impl SelectorList {
    pub fn parse(input: &str) -> Option<Self> {
        let selectors = split_top_level(input)
            .into_iter()
            .map(parse_complex)
            .collect::<Option<Vec<_>>>()?;
        if selectors.is_empty() {
            None
        } else {
            Some(Self(selectors))
        }
    }

    pub fn matches<D: DomHost + ?Sized>(&self, dom: &D, node: NodeId) -> bool {
        self.0.iter().any(|complex| complex.matches(dom, node))
    }
}

fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &[char], mut i: usize) -> Option<(String, usize)> {
    let start = i;
    while i < chars.len() && is_ident_char(chars[i]) {
        i += 1;
    }
    if i == start {
        None
    } else {
        Some((chars[start..i].iter().collect(), i))
    }
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

/// Parses the inside of `[...]`, starting just after `[`.
fn read_attribute(chars: &[char], i: usize) -> Option<((String, Option<String>), usize)> {
    let i = skip_spaces(chars, i);
    let (name, i) = read_ident(chars, i)?;
    let i = skip_spaces(chars, i);

    match chars.get(i)? {
        ']' => Some(((name, None), i + 1)),
        '=' => {
            let i = skip_spaces(chars, i + 1);
            let (value, i) = match chars.get(i)? {
                q @ ('"' | '\'') => {
                    let close = chars[i + 1..].iter().position(|c| c == q)? + i + 1;
                    (chars[i + 1..close].iter().collect::<String>(), close + 1)
                }
                _ => read_ident(chars, i)?,
            };
            let i = skip_spaces(chars, i);
            match chars.get(i)? {
                ']' => Some(((name, Some(value)), i + 1)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn parse_complex(input: &str) -> Option<Complex> {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut compounds = Vec::new();
    let mut current = Compound::default();
    let mut started = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            if started {
                compounds.push(std::mem::take(&mut current));
                started = false;
            }
            i += 1;
            continue;
        }

        match c {
            '#' => {
                let (id, next) = read_ident(&chars, i + 1)?;
                current.id = Some(id);
                i = next;
            }
            '.' => {
                let (class, next) = read_ident(&chars, i + 1)?;
                current.classes.push(class);
                i = next;
            }
            '[' => {
                let (attribute, next) = read_attribute(&chars, i + 1)?;
                current.attributes.push(attribute);
                i = next;
            }
            '*' if !started => i += 1,
            c if is_ident_char(c) && !started => {
                let (tag, next) = read_ident(&chars, i)?;
                current.tag = Some(tag.to_ascii_lowercase());
                i = next;
            }
            // `>`、`+`、`~` 與偽類不支援
            _ => return None,
        }
        started = true;
    }

    if started {
        compounds.push(current);
    }
    if compounds.is_empty() {
        None
    } else {
        Some(Complex(compounds))
    }
}
