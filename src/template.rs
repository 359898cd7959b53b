//! Positional `{}` placeholder filling for the session and message templates.
//!
//! Arguments are substituted left to right. No validation is performed:
//! surplus placeholders survive verbatim and surplus arguments are dropped,
//! so a template that does not match its call site produces garbled lines
//! rather than an error.

pub(crate) fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}
