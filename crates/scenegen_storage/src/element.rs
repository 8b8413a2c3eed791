//! Minimal element tree and its text writer.
//!
//! Attributes keep insertion order and are rendered exactly as stored:
//! reals use the shortest decimal that reads back to the same `f64`
//! (no exponent, no padding), vectors are space separated, flags are `0`/`1`.

use std::fmt;

/// A typed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Real(f64),
    Vector(Vec<f64>),
    Int(u64),
    Flag(bool),
    Text(String),
    /// Space separated list of names
    Words(Vec<String>),
}

impl AttrValue {
    pub fn vector(components: &[f64]) -> Self {
        Self::Vector(components.to_vec())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl<const N: usize> From<[f64; N]> for AttrValue {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(v.to_vec())
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<usize> for AttrValue {
    fn from(v: usize) -> Self {
        Self::Int(v as u64)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{}", v),
            Self::Vector(vs) => {
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", v)?;
                }
                Ok(())
            }
            Self::Int(v) => write!(f, "{}", v),
            Self::Flag(v) => f.write_str(if *v { "1" } else { "0" }),
            Self::Text(s) => f.write_str(&escape(s)),
            Self::Words(words) => f.write_str(&escape(&words.join(" "))),
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// One markup element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, AttrValue)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of the named attribute, if present
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        if self.children.is_empty() {
            return writeln!(f, "/>");
        }
        writeln!(f, ">")?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        writeln!(f, "{}</{}>", indent, self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_formatting() {
        assert_eq!(AttrValue::Real(1.0).to_string(), "1");
        assert_eq!(AttrValue::Real(-0.505).to_string(), "-0.505");
        assert_eq!(AttrValue::Real(1e-9).to_string(), "0.000000001");
        assert_eq!(AttrValue::Real(1.570796326794897).to_string(), "1.570796326794897");
        assert_eq!(AttrValue::Real(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn test_vector_and_flags() {
        assert_eq!(AttrValue::from([0.0, -10.0]).to_string(), "0 -10");
        assert_eq!(AttrValue::from(true).to_string(), "1");
        assert_eq!(AttrValue::from(false).to_string(), "0");
        let words = AttrValue::Words(vec!["ma97".into(), "mumps".into()]);
        assert_eq!(words.to_string(), "ma97 mumps");
    }

    #[test]
    fn test_nesting_and_attribute_order() {
        let el = Element::new("outer")
            .attr("b", 2u32)
            .attr("a", "x<y")
            .child(Element::new("inner").attr("r", 0.5));
        assert_eq!(
            el.to_string(),
            "<outer b=\"2\" a=\"x&lt;y\">\n  <inner r=\"0.5\"/>\n</outer>\n"
        );
        assert_eq!(el.get("a"), Some(&AttrValue::Text("x<y".into())));
        assert_eq!(el.get("missing"), None);
    }
}
