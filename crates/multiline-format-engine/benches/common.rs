// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\nSecond line of the paragraph.\n\n- Bullet point\n    - Nested item\n- [ ] Task item\n\n> Quoted text\n>> Deeper quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_quotes(lines: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        let level = i % depth + 1;
        content.push_str(&">".repeat(level));
        content.push_str(&format!(" quoted line {} at level {}\n", i, level));
    }
    content
}

#[allow(dead_code)]
pub fn lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}
