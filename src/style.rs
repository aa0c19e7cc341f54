// Inline style and markup strings written into the DOM.
// Kept free of web-sys so host tests can include this file directly.

/// CSS colour for a particle fill, e.g. `rgba(0, 255, 255, 0.5)`.
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

/// Transform that puts the follower element's centre on `(x, y)`.
#[inline]
pub fn follower_transform(x: f32, y: f32) -> String {
    format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", x, y)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `<li>` items for the modal feature list.
pub fn feature_list_html(features: &[&str]) -> String {
    features
        .iter()
        .map(|f| format!("<li class='feature'>{}</li>", escape_html(f)))
        .collect()
}

/// Badge spans for the modal tech stack.
pub fn tech_badges_html(tech: &[&str]) -> String {
    tech.iter()
        .map(|t| format!("<span class='badge'>{}</span>", escape_html(t)))
        .collect()
}
