//! 簡易範本替換
//!
//! 支援 `{name}` 佔位符，`{{` 與 `}}` 代表字面上的大括號

use crate::error::{ImportError, ImportResult};
use regex::Regex;
use std::sync::LazyLock;

static REGEX_TEMPLATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("Invalid regex")
});

/// 以 `vars` 替換範本中的佔位符，遇到未知名稱或不成對的大括號時回傳錯誤
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> ImportResult<String> {
    let error = |reason: String| ImportError::Template {
        template: template.to_string(),
        reason,
    };

    let mut rendered = String::with_capacity(template.len());
    let mut last_end = 0;

    for captures in REGEX_TEMPLATE_TOKEN.captures_iter(template) {
        let Some(token) = captures.get(0) else {
            continue;
        };
        rendered.push_str(&template[last_end..token.start()]);
        last_end = token.end();

        match (token.as_str(), captures.get(1)) {
            ("{{", _) => rendered.push('{'),
            ("}}", _) => rendered.push('}'),
            (_, Some(name)) => {
                let value = vars
                    .iter()
                    .find(|(key, _)| *key == name.as_str())
                    .map(|(_, value)| *value)
                    .ok_or_else(|| error(format!("未知的佔位符 {{{}}}", name.as_str())))?;
                rendered.push_str(value);
            }
            (brace, None) => {
                return Err(error(format!(
                    "位置 {} 有不成對的 '{brace}'",
                    token.start()
                )));
            }
        }
    }

    rendered.push_str(&template[last_end..]);
    Ok(rendered)
}
