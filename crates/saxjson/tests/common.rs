#![allow(missing_docs)]
#![allow(dead_code)]

pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null,
        "score": 0.125
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": 2,
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")\n",
        "café 😀"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main",
            "line": 1
        },
        {
            "type": "macro",
            "name": "println",
            "line": -2
        }
    ],
    "matrix": [
        [
            1.5e3,
            -0.0
        ],
        []
    ],
    "flags": [true, false, null]
}
"#;

/// Documents both parsers must reject, each paired with a short label.
pub const INVALID: &[(&str, &str)] = &[
    ("empty", ""),
    ("trailing comma in array", "[1,]"),
    ("trailing comma in object", r#"{"a":1,}"#),
    ("missing colon", r#"{"a" 1}"#),
    ("unquoted key", "{a:1}"),
    ("single quotes", "['a']"),
    ("leading zero", "01"),
    ("bare minus", "-"),
    ("dot without digits", "1."),
    ("unterminated string", r#""abc"#),
    ("bad escape", r#""\q""#),
    ("raw control char", "\"a\u{1}b\""),
    ("lone high surrogate", r#""\ud800""#),
    ("lone low surrogate", r#""\udc00""#),
    ("two values", "1 2"),
    ("unclosed array", "[1, 2"),
    ("unclosed object", r#"{"a": 1"#),
    ("keyword typo", "nul"),
    ("capitalized keyword", "True"),
    ("infinity", "1e400"),
];
