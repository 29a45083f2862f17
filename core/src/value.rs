use itertools::Itertools;
use serde_json::Value;

/// Renders a JSON value as CSS value text. Strings are written unquoted and
/// nothing is escaped or checked.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        Value::Array(items) => render_array(items),
        Value::Object(_) => value.to_string(),
    }
}

/// Comma-joins the items; `null` items render empty.
pub fn render_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            item => render_value(item),
        })
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("0 1px 2px rgb(0 0 0 / 0.05)"), "0 1px 2px rgb(0 0 0 / 0.05)")]
    #[case(json!(400), "400")]
    #[case(json!(0.75), "0.75")]
    #[case(json!(false), "false")]
    #[case(json!(null), "null")]
    #[case(json!([1, [2, 3], null, "a"]), "1,2,3,,a")]
    #[case(json!([]), "")]
    #[case(json!({"b": 1, "a": "x"}), r#"{"b":1,"a":"x"}"#)]
    fn renders(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(render_value(&value), expected);
    }
}
