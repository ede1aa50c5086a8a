/// Joins the present, non-empty class names with single spaces.
pub fn class_list<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|class| !class.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::class_list;

    #[test]
    fn skips_missing_and_blank_parts() {
        let joined = class_list([Some("base"), None, Some(""), Some("  "), Some("extra")]);
        assert_eq!(joined, "base extra");
    }

    #[test]
    fn empty_input_gives_empty_string() {
        assert_eq!(class_list([None, None]), "");
    }
}
