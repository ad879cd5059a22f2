/// Identifier conversion from GraphQL names to Rust names

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield", "gen",
];

/// Keywords that cannot be written as raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Convert camelCase, PascalCase or SCREAMING_CASE to snake_case
///
/// Acronyms stay together: `productID` becomes `product_id`.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = if i > 0 { chars.get(i - 1) } else { None };
            let next = chars.get(i + 1);
            let starts_word = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.map(|n| n.is_lowercase()).unwrap_or(false),
                _ => false,
            };
            if starts_word && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Convert camelCase, snake_case or SCREAMING_CASE to PascalCase
pub fn to_pascal_case(s: &str) -> String {
    let screaming = !s.chars().any(|c| c.is_lowercase());

    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let mut result = first.to_uppercase().collect::<String>();
                    if screaming {
                        result.push_str(&chars.as_str().to_lowercase());
                    } else {
                        result.push_str(chars.as_str());
                    }
                    result
                }
            }
        })
        .collect()
}

/// Field, method or module identifier for a GraphQL name
pub fn rust_field_ident(name: &str) -> String {
    escape_keyword(to_snake_case(name))
}

/// Type identifier for a GraphQL type name
pub fn rust_type_ident(name: &str) -> String {
    escape_keyword(name.to_string())
}

/// Enum variant identifier for a GraphQL enum value or type name
pub fn rust_variant_ident(name: &str) -> String {
    escape_keyword(to_pascal_case(name))
}

fn escape_keyword(ident: String) -> String {
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if is_rust_keyword(&ident) {
        format!("r#{}", ident)
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", ident)
    } else {
        ident
    }
}
