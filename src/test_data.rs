#[cfg(test)]
pub const POST_ARRAY_TAGS: &str = r#"---
title: "Design Systems in Practice"
description: Notes from building a component library
date: "2024-03-10"
author: Jane Doe
category: Design
tags: ["Design", "UI/UX Design", "Components"]
image: /public/blog/design.jpg
---

# Design Systems

A design system is a set of shared decisions.
"#;

#[cfg(test)]
pub const POST_STRING_TAGS: &str = r#"---
title: World News Roundup
date: 2024-01-20
author: John Roe
category: News
tags: iran,world,war
layout: wide
---

Weekly summary.

<!-- draft note: add sources -->
More text.
"#;

#[cfg(test)]
pub const POST_NO_FRONT_MATTER: &str = "# Untitled\n\nJust some text without metadata.\n";

#[cfg(test)]
pub const POST_MALFORMED: &str = "---\ntitle: [broken\n---\nbody\n";

#[cfg(test)]
pub fn post_file(title: &str, date: &str, category: &str, tags: &str) -> String {
    format!("---\ntitle: \"{}\"\ndate: \"{}\"\ncategory: \"{}\"\ntags: {}\n---\n\nBody of {}.\n",
            title, date, category, tags, title)
}
