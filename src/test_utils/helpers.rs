use std::{env, fs, path::PathBuf};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("ssmlparse_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// `<speak>` wrapping `depth` nested `<p>` elements around `text`
pub fn nested_ssml(depth: usize, text: &str) -> String {
    format!(
        "<speak>{}{}{}</speak>",
        "<p>".repeat(depth),
        text,
        "</p>".repeat(depth)
    )
}
