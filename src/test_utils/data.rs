pub const TEST_FILES: [&str; 2] = ["tests/input/greeting.ssml", "tests/input/story.ssml"];

pub const VALID_SSML_SAMPLES: [(&str, &str); 6] = [
    ("<speak/>", ""),
    ("<speak></speak>", ""),
    ("<speak>Hello</speak>", "Hello"),
    (
        r#"<speak>Wait<break time="500ms"/>for it</speak>"#,
        "Waitfor it",
    ),
    (
        r#"<speak><p><s>One.</s> <s>Two.</s></p></speak>"#,
        "One.Two.",
    ),
    (
        r#"<speak><sub alias="World Wide Web">WWW</sub> &amp; more</speak>"#,
        "WWW & more",
    ),
];

pub const INVALID_SSML_SAMPLES: [(&str, &str); 8] = [
    ("", "Empty document"),
    ("Hello", "Text root"),
    ("<voice>Hi</voice>", "Wrong root name"),
    ("<speak/><speak/>", "Multiple roots"),
    ("<speak>Hi</speak> trailing", "Trailing text"),
    ("<speak>", "Unclosed root"),
    (r#"<speak><b x="y</speak>"#, "Unterminated attribute"),
    ("<speak><></speak>", "Empty tag"),
];
