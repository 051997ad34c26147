//! The fixed list the store is seeded with at startup.

use crate::content::{ContentItem, ContentType};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn seed_items() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "1",
            ContentType::Article,
            "The Future of AI in Web Development",
            "Artificial Intelligence is revolutionizing how we build web applications. From automated code generation to intelligent debugging, AI tools are becoming indispensable for modern developers...",
            date(2024, 1, 15),
        )
        .with_tags(["AI", "Web Development", "Technology", "Future"])
        .with_author("Tech Weekly")
        .with_url("https://example.com/ai-web-dev"),
        ContentItem::new(
            "2",
            ContentType::Tweet,
            "React 19 Features",
            "🚀 React 19 is here! New features include: • Server Components • Concurrent Features • Automatic Batching • New Hooks The future of React looks amazing! #React19 #WebDev",
            date(2024, 1, 14),
        )
        .with_tags(["React", "JavaScript", "Frontend"])
        .with_author("@reactjs"),
        ContentItem::new(
            "3",
            ContentType::Video,
            "Advanced TypeScript Patterns",
            "Learn advanced TypeScript patterns that will make your code more type-safe and maintainable. This video covers conditional types, mapped types, and template literal types...",
            date(2024, 1, 13),
        )
        .with_tags(["TypeScript", "Programming", "Tutorial"])
        .with_author("Code Academy")
        .with_url("https://youtube.com/watch?v=example"),
        ContentItem::new(
            "4",
            ContentType::Audio,
            "The Psychology of User Experience",
            "A deep dive into how users interact with digital interfaces and the psychological principles that drive good UX design. Topics include cognitive load, decision fatigue, and user motivation...",
            date(2024, 1, 12),
        )
        .with_tags(["UX", "Psychology", "Design", "Podcast"])
        .with_author("UX Podcast"),
        ContentItem::new(
            "5",
            ContentType::Bookmark,
            "CSS Grid Generator Tool",
            "An interactive tool for generating CSS Grid layouts. Perfect for quickly prototyping grid-based designs with visual controls for gap, columns, rows, and alignment...",
            date(2024, 1, 11),
        )
        .with_tags(["CSS", "Tools", "Grid", "Design"])
        .with_url("https://cssgrid-generator.netlify.app"),
        ContentItem::new(
            "6",
            ContentType::Article,
            "Building Scalable React Applications",
            "Best practices for structuring large React applications. Learn about component architecture, state management patterns, and performance optimization techniques...",
            date(2024, 1, 10),
        )
        .with_tags(["React", "Architecture", "Scalability", "Best Practices"])
        .with_author("React Patterns")
        .with_url("https://example.com/scalable-react"),
    ]
}
