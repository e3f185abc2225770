// src/api/template.rs
use crate::api::utils::escape_html;
use crate::models::Strength;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Values shown on the index page. Form fields echo what was submitted.
#[derive(Debug, Default)]
pub struct IndexPage<'a> {
    pub length: String,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
    pub avoid: bool,
    pub words: &'a str,
    pub result: Option<(&'a str, Strength)>,
}

impl IndexPage<'_> {
    pub fn render(&self) -> String {
        render(INDEX_TEMPLATE, |name| self.value(name))
    }

    fn value(&self, name: &str) -> Option<String> {
        let checked = |on: bool| (if on { "checked" } else { "" }).to_string();
        Some(match name {
            "length" => escape_html(&self.length),
            "upper" => checked(self.upper),
            "lower" => checked(self.lower),
            "digits" => checked(self.digits),
            "special" => checked(self.special),
            "avoid" => checked(self.avoid),
            "words" => escape_html(self.words),
            "result" => match self.result {
                Some((password, strength)) => format!(
                    "    <div class=\"result\">\n        \
                     <p>Password: <code id=\"password\">{}</code></p>\n        \
                     <p>Strength: <strong id=\"strength\" class=\"strength-{}\">{}</strong></p>\n    \
                     </div>",
                    escape_html(password),
                    strength,
                    strength
                ),
                None => String::new(),
            },
            _ => return None,
        })
    }
}

// Single pass over the template so substituted values are never re-expanded.
fn render<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        log::warn!("Unknown template placeholder '{}'", name);
                        out.push_str(&rest[start..start + 2 + end + 2]);
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
