// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_page(size: usize) -> String {
    let base = "* Title [#t]\n\n** Section\n\nParagraph with ''some'' %%content%% and a [[link>FrontPage]].\n\n-Bullet point\n--Nested item\n-Another item\n\n|~a|~b|h\n|1|2|\n|~|3|\n\n> quoted &color(red){text};\n\n code block\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(items: usize, depth: usize) -> String {
    let mut content = String::new();
    for item in 0..items {
        for level in 1..=depth {
            content.push_str(&format!("{}item {item} at level {level}\n", "-".repeat(level)));
        }
    }
    content
}
