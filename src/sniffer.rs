//! スニッファールールの構文チェック
//!
//! ルールは `<priority> <pattern list>` 形式（例: `0.80 [0:32] ("%PDF")`）。
//! priority は 0.0〜1.0、パターン部は括弧の対応が取れている必要がある。

use regex::Regex;
use std::sync::OnceLock;

fn rule_regex() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| {
        Regex::new(r"^\s*(\d+(?:\.\d*)?|\.\d+)\s*(\S.*?)\s*$")
            .expect("sniffer rule pattern is valid")
    })
}

/// ルールを検証し、エラー時は理由を返す
pub fn validate_rule(rule: &str) -> Result<(), String> {
    let caps = rule_regex()
        .captures(rule)
        .ok_or_else(|| "expected '<priority> <patterns>'".to_string())?;

    let priority: f32 = caps[1]
        .parse()
        .map_err(|_| format!("invalid priority '{}'", &caps[1]))?;
    if !(0.0..=1.0).contains(&priority) {
        return Err(format!("priority {} is outside 0.0..1.0", priority));
    }

    check_patterns(&caps[2])
}

/// パターン部の括弧・引用符の対応を確認
fn check_patterns(body: &str) -> Result<(), String> {
    let mut stack = Vec::new();
    // 開いている引用符（' または "）
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut has_group = false;

    for c in body.chars() {
        if let Some(open) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == open => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => {
                has_group |= c == '(';
                stack.push(c);
            }
            ')' | ']' => {
                let open = if c == ')' { '(' } else { '[' };
                if stack.pop() != Some(open) {
                    return Err(format!("unbalanced '{}'", c));
                }
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err("unterminated string".to_string());
    }
    if let Some(open) = stack.pop() {
        return Err(format!("unclosed '{}'", open));
    }
    if !has_group {
        return Err("missing pattern list '( ... )'".to_string());
    }
    Ok(())
}
