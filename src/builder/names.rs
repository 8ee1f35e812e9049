//! Method name → statement keyword translation.
//!
//! Dynamic dispatch (`y.call("leaf_list", ..)`, `stmt!(y, leaf_list, ..)`)
//! spells keywords as Rust identifiers. The mapping is:
//!
//! ```text
//! ext__c_define        → ext:c-define   (`__` is the prefix separator)
//! allow_user           → allow-user     (`_` becomes `-`)
//! c_define + "ext"     → ext:c-define   (explicit prefix)
//! ```

use crate::tree::keywords::{PREFIX_SEPARATOR, strip_prefix};

/// Translate a method name into a statement keyword.
///
/// An explicit `prefix` replaces any prefix already spelled in the name.
/// Raw identifiers (`r#type`) are accepted so that reserved words can be
/// passed through `stmt!`.
pub fn keyword_for(method: &str, prefix: Option<&str>) -> String {
    let method = method.strip_prefix("r#").unwrap_or(method);
    let keyword = method
        .replace("__", &PREFIX_SEPARATOR.to_string())
        .replace('_', "-");
    match prefix {
        Some(prefix) => format!("{prefix}{PREFIX_SEPARATOR}{}", strip_prefix(&keyword)),
        None => keyword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("prefix", None, "prefix")]
    #[case("allow_user", None, "allow-user")]
    #[case("leaf_list", None, "leaf-list")]
    #[case("ext__c_define", None, "ext:c-define")]
    #[case("c_define", Some("ext"), "ext:c-define")]
    #[case("other__c_define", Some("ext"), "ext:c-define")]
    #[case("type", Some("ext"), "ext:type")]
    #[case("r#type", None, "type")]
    #[case("r#enum", None, "enum")]
    fn test_keyword_for(
        #[case] method: &str,
        #[case] prefix: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(keyword_for(method, prefix), expected);
    }
}
