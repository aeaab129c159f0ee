// src/utils/html.rs

/// Visible text of user input once every tag is removed, via ammonia with
/// an empty whitelist. `<script>`/`<style>` bodies go too.
///
/// Only used to decide whether a comment says anything. The stored text is
/// the raw input; pages render it through `textContent`.
pub fn visible_text(input: &str) -> String {
    ammonia::Builder::empty().clean(input).to_string()
}
