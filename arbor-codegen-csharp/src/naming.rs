//! C#-specific naming conventions.

/// Convert a name to PascalCase (C# types, properties, methods).
pub fn pascal_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a name to camelCase (C# parameters, locals).
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("customer"), "Customer");
        assert_eq!(pascal_case("order_line"), "OrderLine");
        assert_eq!(pascal_case("order-line item"), "OrderLineItem");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Customer"), "customer");
        assert_eq!(camel_case("order_line"), "orderLine");
    }
}
