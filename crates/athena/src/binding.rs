//! Named-parameter binding for SQL templates.
//!
//! Templates refer to parameters as `:name`. Binding replaces every
//! placeholder with a positional `?` and returns the matching Athena
//! execution parameters in occurrence order. Values never end up in the
//! statement text itself.

use atelier_core::{ParamValue, QueryError, QueryRequest};

/// A template with placeholders rewritten and its execution parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    pub sql: String,
    /// One literal per `?`, in statement order.
    pub parameters: Vec<String>,
    /// Placeholder names in statement order, for logs.
    pub names: Vec<String>,
}

/// Render a parameter as the SQL literal Athena expects in `ExecutionParameters`.
pub fn render_literal(value: &ParamValue) -> String {
    match value {
        ParamValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        ParamValue::Integer(n) => n.to_string(),
        ParamValue::Float(x) if x.is_finite() => x.to_string(),
        ParamValue::Float(_) => "NULL".to_string(),
        ParamValue::Date(d) => format!("DATE '{}'", d.format("%Y-%m-%d")),
        ParamValue::Null => "NULL".to_string(),
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Bind `request`'s parameters into `template`.
///
/// Quoted literals (`'...'`, `"..."`), `--` line comments, `/* */` block
/// comments and `::` casts are copied through untouched. A placeholder with
/// no matching parameter is a [`QueryError::Binding`]; unused parameters are
/// ignored.
pub fn bind(template: &str, request: &QueryRequest) -> Result<BoundQuery, QueryError> {
    let chars: Vec<char> = template.chars().collect();
    let mut sql = String::with_capacity(template.len());
    let mut parameters = Vec::new();
    let mut names = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                // Doubled quotes inside the literal are consumed as a pair.
                sql.push(c);
                i += 1;
                while i < chars.len() {
                    sql.push(chars[i]);
                    if chars[i] == c {
                        if chars.get(i + 1) == Some(&c) {
                            sql.push(c);
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
                i += 1;
            }
            '-' if chars.get(i + 1) == Some(&'-') => {
                while i < chars.len() && chars[i] != '\n' {
                    sql.push(chars[i]);
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                // Unterminated comments run to the end of the template.
                sql.push_str("/*");
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        sql.push_str("*/");
                        i += 2;
                        break;
                    }
                    sql.push(chars[i]);
                    i += 1;
                }
            }
            ':' if chars.get(i + 1) == Some(&':') => {
                sql.push_str("::");
                i += 2;
            }
            ':' if chars.get(i + 1).copied().is_some_and(is_ident_start) => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident(chars[end]) {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                let value = request.param(&name).ok_or_else(|| {
                    QueryError::Binding(format!(
                        "template '{}' needs parameter ':{}'",
                        request.template_id, name
                    ))
                })?;
                sql.push('?');
                parameters.push(render_literal(value));
                names.push(name);
                i = end;
            }
            _ => {
                sql.push(c);
                i += 1;
            }
        }
    }

    Ok(BoundQuery {
        sql,
        parameters,
        names,
    })
}
